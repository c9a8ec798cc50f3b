//! One normalization rule per catalog kind.
//!
//! Rules are plain functions from a [`Fields`] view to a typed record. They never
//! fail: missing and wrong-shaped fields fall back to defaults.

mod generic;
mod restaurant;
mod verticals;

use serde_json::Value;

use crate::canonical::{CanonicalProps, FormProps, Link};
use crate::coerce;
use crate::fields::Fields;
use crate::kind::ComponentKind;

/// Aliases for a section heading.
pub(crate) const HEADING: &[&str] = &["heading", "title"];

/// Runs the built-in rule for `kind`.
pub fn apply(kind: ComponentKind, fields: &Fields<'_>) -> CanonicalProps {
    use CanonicalProps as P;
    use ComponentKind as K;
    match kind {
        K::Header => P::Header(generic::header(fields)),
        K::Hero => P::Hero(generic::hero(fields)),
        K::FeatureGrid => P::FeatureGrid(generic::feature_grid(fields)),
        K::ProductGrid => P::ProductGrid(verticals::product_grid(fields)),
        K::Pricing => P::Pricing(generic::pricing(fields)),
        K::Testimonials => P::Testimonials(generic::testimonials(fields)),
        K::Faq => P::Faq(generic::faq(fields)),
        K::Gallery => P::Gallery(generic::gallery(fields)),
        K::Contact => P::Contact(generic::contact(fields)),
        K::BlogList => P::BlogList(generic::blog_list(fields)),
        K::CartSummary => P::CartSummary(verticals::cart_summary(fields)),
        K::EventList => P::EventList(generic::event_list(fields)),
        K::Stats => P::Stats(generic::stats(fields)),
        K::ReservationForm => P::ReservationForm(restaurant::reservation_form(fields)),
        K::RestaurantMenu => P::RestaurantMenu(restaurant::restaurant_menu(fields)),
        K::DoctorCard => P::DoctorCard(verticals::doctor_card(fields)),
        K::AppointmentList => P::AppointmentList(verticals::appointment_list(fields)),
        K::IntroSection => P::IntroSection(generic::intro_section(fields)),
        K::SplitFeature => P::SplitFeature(generic::split_feature(fields)),
        K::ValueBadges => P::ValueBadges(generic::value_badges(fields)),
        K::CtaSection => P::CtaSection(generic::cta_section(fields)),
        K::NewsletterSignup => P::NewsletterSignup(generic::newsletter_signup(fields)),
        K::PrivateDining => P::PrivateDining(restaurant::private_dining(fields)),
        K::Catering => P::Catering(restaurant::catering(fields)),
        K::WineListHighlight => P::WineListHighlight(restaurant::wine_list_highlight(fields)),
        K::MapList => P::MapList(restaurant::map_list(fields)),
        K::Divider => P::Divider(generic::divider(fields)),
        K::PropertyList => P::PropertyList(verticals::property_list(fields)),
        K::PropertyMap => P::PropertyMap(verticals::property_map(fields)),
        K::CourseList => P::CourseList(verticals::course_list(fields)),
        K::CourseSyllabus => P::CourseSyllabus(verticals::course_syllabus(fields)),
        K::JobList => P::JobList(verticals::job_list(fields)),
        K::Team => P::Team(generic::team(fields)),
        K::Steps => P::Steps(generic::steps(fields)),
        K::CheckoutForm => P::CheckoutForm(verticals::checkout_form(fields)),
        K::SpecialsCarousel => P::SpecialsCarousel(restaurant::specials_carousel(fields)),
        K::PressLogos => P::PressLogos(generic::logo_strip(fields)),
        K::CustomersLogos => P::CustomersLogos(generic::logo_strip(fields)),
        K::AwardsBar => P::AwardsBar(restaurant::awards_bar(fields)),
        K::ChefBio => P::ChefBio(restaurant::chef_bio(fields)),
        K::DishGrid => P::DishGrid(restaurant::dish_grid(fields)),
        K::BookingCta => P::BookingCta(restaurant::booking_cta(fields)),
        K::Hours => P::Hours(restaurant::hours(fields)),
        K::LocationMap => P::LocationMap(restaurant::location_map(fields)),
        K::TestimonialHighlight => {
            P::TestimonialHighlight(generic::testimonial_highlight(fields))
        }
        K::SocialStrip => P::SocialStrip(generic::social_strip(fields)),
        K::Footer => P::Footer(generic::footer(fields)),
    }
}

/// List entries where objects go through `rule` and bare strings or numbers
/// through `from_text`. Anything else is dropped.
pub(crate) fn entries<'a, T>(
    items: impl IntoIterator<Item = &'a Value>,
    rule: impl Fn(&Fields<'a>) -> T,
    from_text: impl Fn(String) -> T,
) -> Vec<T> {
    coerce::list_of(items, |item| match item {
        Value::Object(_) => Some(rule(&Fields::new(item))),
        other => coerce::text(other).map(&from_text),
    })
}

/// Navigation links; entries without a label are dropped.
pub(crate) fn nav_links(items: &[Value]) -> Vec<Link> {
    coerce::list_of(items, coerce::link)
        .into_iter()
        .filter(|link| !link.label.is_empty())
        .collect()
}

/// A form: caller-supplied field list or `default_fields`.
pub(crate) fn form(
    fields: &Fields<'_>,
    heading: &str,
    default_fields: &[&str],
    submit_label: &str,
) -> FormProps {
    let form_fields = if fields.has_list(&["fields"]) {
        coerce::string_list(fields.list(&["fields"]))
    } else {
        default_fields.iter().map(|f| f.to_string()).collect()
    };
    FormProps {
        heading: fields.text(HEADING, heading),
        fields: form_fields,
        submit_label: fields.text(&["submitLabel", "buttonLabel"], submit_label),
    }
}
