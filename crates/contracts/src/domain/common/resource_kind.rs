use super::ResourceDef;
use crate::domain::*;

/// Every resource type managed by the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Tours,
    Blogs,
    News,
    Events,
    Upcoming,
    Sliders,
    Partners,
    Testimonials,
    Faq,
    Privacy,
    Careers,
    CareerRequirements,
    Itinerary,
    Includes,
    Excludes,
    Gallery,
    TourGallery,
    BlogGallery,
    ContactAddresses,
    ContactMails,
    ContactNumbers,
    JobApplications,
}

impl ResourceKind {
    /// Dashboard order.
    pub const ALL: [ResourceKind; 22] = [
        ResourceKind::Tours,
        ResourceKind::Itinerary,
        ResourceKind::Includes,
        ResourceKind::Excludes,
        ResourceKind::TourGallery,
        ResourceKind::Upcoming,
        ResourceKind::Blogs,
        ResourceKind::BlogGallery,
        ResourceKind::News,
        ResourceKind::Events,
        ResourceKind::Sliders,
        ResourceKind::Partners,
        ResourceKind::Testimonials,
        ResourceKind::Gallery,
        ResourceKind::Faq,
        ResourceKind::Privacy,
        ResourceKind::Careers,
        ResourceKind::CareerRequirements,
        ResourceKind::JobApplications,
        ResourceKind::ContactAddresses,
        ResourceKind::ContactMails,
        ResourceKind::ContactNumbers,
    ];

    pub fn def(&self) -> &'static ResourceDef {
        match self {
            ResourceKind::Tours => &a001_tour::aggregate::DEF,
            ResourceKind::Blogs => &a002_blog::aggregate::DEF,
            ResourceKind::News => &a003_news::aggregate::DEF,
            ResourceKind::Events => &a004_event::aggregate::DEF,
            ResourceKind::Upcoming => &a005_upcoming::aggregate::DEF,
            ResourceKind::Sliders => &a006_slider::aggregate::DEF,
            ResourceKind::Partners => &a007_partner::aggregate::DEF,
            ResourceKind::Testimonials => &a008_testimonial::aggregate::DEF,
            ResourceKind::Faq => &a009_faq::aggregate::DEF,
            ResourceKind::Privacy => &a010_privacy::aggregate::DEF,
            ResourceKind::Careers => &a011_career::aggregate::DEF,
            ResourceKind::CareerRequirements => &a012_career_requirement::aggregate::DEF,
            ResourceKind::Itinerary => &a013_itinerary::aggregate::DEF,
            ResourceKind::Includes => &a014_tour_include::aggregate::DEF,
            ResourceKind::Excludes => &a015_tour_exclude::aggregate::DEF,
            ResourceKind::Gallery => &a016_gallery::aggregate::DEF,
            ResourceKind::TourGallery => &a017_tour_gallery::aggregate::DEF,
            ResourceKind::BlogGallery => &a018_blog_gallery::aggregate::DEF,
            ResourceKind::ContactAddresses => &a019_contact_address::aggregate::DEF,
            ResourceKind::ContactMails => &a020_contact_mail::aggregate::DEF,
            ResourceKind::ContactNumbers => &a021_contact_number::aggregate::DEF,
            ResourceKind::JobApplications => &a022_job_application::aggregate::DEF,
        }
    }

    /// Collection path under `/api/`.
    pub fn path(&self) -> &'static str {
        self.def().path
    }

    /// Resolve a route/API path segment back to its kind.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_matches('/');
        Self::ALL.iter().copied().find(|kind| kind.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique_and_resolve_back() {
        let mut seen = HashSet::new();
        for kind in ResourceKind::ALL {
            assert!(seen.insert(kind.path()), "duplicate path {}", kind.path());
            assert_eq!(ResourceKind::from_path(kind.path()), Some(kind));
            assert_eq!(kind.def().kind, kind);
        }
        assert_eq!(seen.len(), 22);
    }

    #[test]
    fn test_from_path_unknown() {
        assert_eq!(ResourceKind::from_path("/tours/"), Some(ResourceKind::Tours));
        assert_eq!(ResourceKind::from_path("orders"), None);
    }

    #[test]
    fn test_every_resource_has_fields() {
        for kind in ResourceKind::ALL {
            let def = kind.def();
            assert!(!def.fields.is_empty(), "{} has no fields", def.path);
            assert!(def.list_fields().count() > 0, "{} has no list columns", def.path);
        }
    }

    #[test]
    fn test_grouped_resources_point_at_tours() {
        for kind in [ResourceKind::Itinerary, ResourceKind::Includes] {
            let (field, parent) = kind.def().parent_field().expect("parent field");
            assert_eq!(field.key, "tour_id");
            assert_eq!(parent, ResourceKind::Tours);
        }
    }
}
