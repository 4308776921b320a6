pub mod common;

pub mod a001_tour;
pub mod a002_blog;
pub mod a003_news;
pub mod a004_event;
pub mod a005_upcoming;
pub mod a006_slider;
pub mod a007_partner;
pub mod a008_testimonial;
pub mod a009_faq;
pub mod a010_privacy;
pub mod a011_career;
pub mod a012_career_requirement;
pub mod a013_itinerary;
pub mod a014_tour_include;
pub mod a015_tour_exclude;
pub mod a016_gallery;
pub mod a017_tour_gallery;
pub mod a018_blog_gallery;
pub mod a019_contact_address;
pub mod a020_contact_mail;
pub mod a021_contact_number;
pub mod a022_job_application;
