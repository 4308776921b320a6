//! Resolves `/admin/:resource/...` to the screen of a concrete record type.

use contracts::domain::a001_tour::aggregate::Tour;
use contracts::domain::a002_blog::aggregate::Blog;
use contracts::domain::a003_news::aggregate::NewsItem;
use contracts::domain::a004_event::aggregate::Event;
use contracts::domain::a005_upcoming::aggregate::UpcomingTour;
use contracts::domain::a006_slider::aggregate::Slide;
use contracts::domain::a007_partner::aggregate::Partner;
use contracts::domain::a008_testimonial::aggregate::Testimonial;
use contracts::domain::a009_faq::aggregate::FaqEntry;
use contracts::domain::a010_privacy::aggregate::PrivacySection;
use contracts::domain::a011_career::aggregate::Career;
use contracts::domain::a012_career_requirement::aggregate::CareerRequirement;
use contracts::domain::a013_itinerary::aggregate::ItineraryStep;
use contracts::domain::a014_tour_include::aggregate::TourInclude;
use contracts::domain::a015_tour_exclude::aggregate::TourExclude;
use contracts::domain::a016_gallery::aggregate::GalleryImage;
use contracts::domain::a017_tour_gallery::aggregate::TourGalleryImage;
use contracts::domain::a018_blog_gallery::aggregate::BlogGalleryImage;
use contracts::domain::a019_contact_address::aggregate::ContactAddress;
use contracts::domain::a020_contact_mail::aggregate::ContactMail;
use contracts::domain::a021_contact_number::aggregate::ContactNumber;
use contracts::domain::a022_job_application::aggregate::JobApplication;
use contracts::domain::common::ResourceKind;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::domain::resource::ui::details::ResourceView;
use crate::domain::resource::ui::form::ResourceForm;
use crate::domain::resource::ui::grouped::GroupedResourceList;
use crate::domain::resource::ui::list::ResourceList;
use crate::shared::http::{use_api, ApiClient};
use crate::shared::resource_client::ResourceClient;
use crate::system::pages::not_found::NotFound;

/// Runs `$body` with `$T` bound to the record type of `$kind`.
macro_rules! with_resource {
    ($kind:expr, |$T:ident| $body:expr) => {
        match $kind {
            ResourceKind::Tours => { type $T = Tour; $body }
            ResourceKind::Blogs => { type $T = Blog; $body }
            ResourceKind::News => { type $T = NewsItem; $body }
            ResourceKind::Events => { type $T = Event; $body }
            ResourceKind::Upcoming => { type $T = UpcomingTour; $body }
            ResourceKind::Sliders => { type $T = Slide; $body }
            ResourceKind::Partners => { type $T = Partner; $body }
            ResourceKind::Testimonials => { type $T = Testimonial; $body }
            ResourceKind::Faq => { type $T = FaqEntry; $body }
            ResourceKind::Privacy => { type $T = PrivacySection; $body }
            ResourceKind::Careers => { type $T = Career; $body }
            ResourceKind::CareerRequirements => { type $T = CareerRequirement; $body }
            ResourceKind::Itinerary => { type $T = ItineraryStep; $body }
            ResourceKind::Includes => { type $T = TourInclude; $body }
            ResourceKind::Excludes => { type $T = TourExclude; $body }
            ResourceKind::Gallery => { type $T = GalleryImage; $body }
            ResourceKind::TourGallery => { type $T = TourGalleryImage; $body }
            ResourceKind::BlogGallery => { type $T = BlogGalleryImage; $body }
            ResourceKind::ContactAddresses => { type $T = ContactAddress; $body }
            ResourceKind::ContactMails => { type $T = ContactMail; $body }
            ResourceKind::ContactNumbers => { type $T = ContactNumber; $body }
            ResourceKind::JobApplications => { type $T = JobApplication; $body }
        }
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    List,
    Add,
    View,
    Edit,
}

/// Screen for the `:resource` and `:id` route params.
#[component]
pub fn ResourceScreen(screen: Screen) -> impl IntoView {
    let params = use_params_map();
    let api = use_api();

    move || {
        let kind = params
            .with(|p| p.get("resource"))
            .and_then(|path| ResourceKind::from_path(&path));
        let id = params.with(|p| p.get("id")).and_then(|raw| parse_id(&raw));

        match kind {
            Some(kind) => render(kind, screen, id, api.clone()),
            None => view! { <NotFound /> }.into_any(),
        }
    }
}

fn render(kind: ResourceKind, screen: Screen, id: Option<i64>, api: ApiClient) -> AnyView {
    let def = kind.def();

    match (screen, id) {
        (Screen::List, _) if kind == ResourceKind::Itinerary => view! {
            <GroupedResourceList client={ResourceClient::<ItineraryStep>::new(api)} />
        }
        .into_any(),
        (Screen::List, _) if kind == ResourceKind::Includes => view! {
            <GroupedResourceList client={ResourceClient::<TourInclude>::new(api)} />
        }
        .into_any(),
        (Screen::List, _) => with_resource!(kind, |T| view! {
            <ResourceList client={ResourceClient::<T>::new(api)} />
        }
        .into_any()),
        (Screen::Add, _) if def.creatable => with_resource!(kind, |T| view! {
            <ResourceForm client={ResourceClient::<T>::new(api)} id=None />
        }
        .into_any()),
        (Screen::View, Some(id)) => with_resource!(kind, |T| view! {
            <ResourceView client={ResourceClient::<T>::new(api)} id=id />
        }
        .into_any()),
        (Screen::Edit, Some(id)) if def.editable => with_resource!(kind, |T| view! {
            <ResourceForm client={ResourceClient::<T>::new(api)} id=Some(id) />
        }
        .into_any()),
        _ => {
            log::warn!("no {:?} screen for {} (id {:?})", screen, def.path, id);
            view! { <NotFound /> }.into_any()
        }
    }
}

/// Backend ids are positive integers.
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id("abc"), None);
    }
}
