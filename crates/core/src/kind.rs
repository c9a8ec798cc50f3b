//! The closed catalog of component kinds that have a normalization rule.
//!
//! Descriptor `type` strings stay open-ended; [`ComponentKind::from_tag`] maps the
//! ones this crate understands and everything else falls through to pass-through.

use std::fmt;

macro_rules! component_kinds {
    ($($variant:ident => $tag:literal),+ $(,)?) => {
        /// A component type with a built-in normalization rule.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ComponentKind {
            $(
                #[doc = concat!("`", $tag, "` component.")]
                $variant,
            )+
        }

        impl ComponentKind {
            /// Every kind in the catalog, in declaration order.
            pub const ALL: &'static [ComponentKind] = &[$(ComponentKind::$variant),+];

            /// Returns the descriptor `type` tag for this kind.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(ComponentKind::$variant => $tag,)+
                }
            }

            /// Maps a descriptor `type` tag to a kind. Tags are case-sensitive.
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(ComponentKind::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

component_kinds! {
    Header => "Header",
    Hero => "Hero",
    FeatureGrid => "FeatureGrid",
    ProductGrid => "ProductGrid",
    Pricing => "Pricing",
    Testimonials => "Testimonials",
    Faq => "FAQ",
    Gallery => "Gallery",
    Contact => "Contact",
    BlogList => "BlogList",
    CartSummary => "CartSummary",
    EventList => "EventList",
    Stats => "Stats",
    ReservationForm => "ReservationForm",
    RestaurantMenu => "RestaurantMenu",
    DoctorCard => "DoctorCard",
    AppointmentList => "AppointmentList",
    IntroSection => "IntroSection",
    SplitFeature => "SplitFeature",
    ValueBadges => "ValueBadges",
    CtaSection => "CTASection",
    NewsletterSignup => "NewsletterSignup",
    PrivateDining => "PrivateDining",
    Catering => "Catering",
    WineListHighlight => "WineListHighlight",
    MapList => "MapList",
    Divider => "Divider",
    PropertyList => "PropertyList",
    PropertyMap => "PropertyMap",
    CourseList => "CourseList",
    CourseSyllabus => "CourseSyllabus",
    JobList => "JobList",
    Team => "Team",
    Steps => "Steps",
    CheckoutForm => "CheckoutForm",
    SpecialsCarousel => "SpecialsCarousel",
    PressLogos => "PressLogos",
    CustomersLogos => "CustomersLogos",
    AwardsBar => "AwardsBar",
    ChefBio => "ChefBio",
    DishGrid => "DishGrid",
    BookingCta => "BookingCTA",
    Hours => "Hours",
    LocationMap => "LocationMap",
    TestimonialHighlight => "TestimonialHighlight",
    SocialStrip => "SocialStrip",
    Footer => "Footer",
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tags_round_trip_for_every_kind() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_tag(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn tags_are_unique() {
        let tags: HashSet<&str> = ComponentKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(tags.len(), ComponentKind::ALL.len());
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(ComponentKind::from_tag("FAQ"), Some(ComponentKind::Faq));
        assert_eq!(ComponentKind::from_tag("Faq"), None);
        assert_eq!(ComponentKind::from_tag("header"), None);
        assert_eq!(ComponentKind::from_tag(""), None);
    }

    #[test]
    fn display_uses_the_tag() {
        assert_eq!(ComponentKind::CtaSection.to_string(), "CTASection");
        assert_eq!(ComponentKind::BookingCta.to_string(), "BookingCTA");
    }
}
