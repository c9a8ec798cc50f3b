//! Canonical, renderer-ready props records.
//!
//! Field names serialize in camelCase and match the keys renderers read. Optional
//! sub-objects (calls to action, images) are omitted when absent; every other
//! field is always present.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::kind::ComponentKind;

/// A navigation link or call to action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Link {
    /// Visible text
    pub label: String,
    /// Target URL, `"#"` when none was given
    pub href: String,
}

/// Calls to action share the link shape.
pub type Cta = Link;

/// An image reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Image {
    /// Image URL, never empty
    pub src: String,
    /// Alt text
    pub alt: String,
}

// ── Generic ─────────────────────────────────────────────────

/// Site header with brand text and navigation.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderProps {
    /// Brand name shown in place of a logo
    pub logo_text: String,
    /// Navigation links
    pub links: Vec<Link>,
    /// Header button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<Cta>,
}

/// Hero banner.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroProps {
    /// Headline
    pub title: String,
    /// Supporting line
    pub subtitle: String,
    /// Main button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_cta: Option<Cta>,
    /// Banner image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

/// Grid of short feature blurbs.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FeatureGridProps {
    /// Section heading
    pub heading: String,
    /// Features in display order
    pub items: Vec<Feature>,
}

/// One feature blurb.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Feature {
    /// Icon name or emoji
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Feature title
    pub title: String,
    /// Feature description
    pub text: String,
}

/// Product cards.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProductGridProps {
    /// Section heading
    pub heading: String,
    /// Products in display order
    pub items: Vec<Product>,
}

/// One product card.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Product {
    /// Product name
    pub title: String,
    /// Product photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Display price
    pub price: String,
}

/// Pricing table.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PricingProps {
    /// Section heading
    pub heading: String,
    /// Plans in display order
    pub plans: Vec<Plan>,
}

/// One pricing plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Plan {
    /// Plan name
    pub name: String,
    /// Display price
    pub price: String,
    /// Included features
    pub features: Vec<String>,
    /// Sign-up button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<Cta>,
}

/// Customer quotes.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TestimonialsProps {
    /// Section heading
    pub heading: String,
    /// Quotes in display order
    pub items: Vec<Testimonial>,
}

/// One customer quote.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Testimonial {
    /// Quote text
    pub quote: String,
    /// Who said it
    pub author: String,
    /// Author's role or company
    pub role: String,
    /// Author photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Image>,
}

/// Frequently asked questions.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FaqProps {
    /// Section heading
    pub heading: String,
    /// Questions in display order
    pub items: Vec<FaqItem>,
}

/// One question and its answer.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FaqItem {
    /// Question
    pub q: String,
    /// Answer
    pub a: String,
}

/// Image gallery.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GalleryProps {
    /// Section heading
    pub heading: String,
    /// Images, deduplicated by source, in first-seen order
    pub images: Vec<Image>,
}

/// Shared by `Contact`, `ReservationForm` and `CheckoutForm`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormProps {
    /// Form heading
    pub heading: String,
    /// Input field names in display order
    pub fields: Vec<String>,
    /// Submit button text
    pub submit_label: String,
}

/// Blog post teasers.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BlogListProps {
    /// Section heading
    pub heading: String,
    /// Posts in display order
    pub items: Vec<Post>,
}

/// One blog post teaser.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Post {
    /// Post title
    pub title: String,
    /// Short summary
    pub excerpt: String,
    /// Link to the full post
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Shopping cart totals.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummaryProps {
    /// Display subtotal
    pub subtotal: String,
    /// Display shipping cost
    pub shipping: String,
    /// Display total
    pub total: String,
    /// Checkout button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_cta: Option<Cta>,
}

/// Upcoming events.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EventListProps {
    /// Section heading
    pub heading: String,
    /// Events in display order
    pub items: Vec<Event>,
}

/// One event.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Event {
    /// Event name
    pub title: String,
    /// Date as given
    pub date: String,
    /// Venue
    pub location: String,
}

/// Headline numbers.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StatsProps {
    /// Section heading
    pub heading: String,
    /// Stats in display order
    pub items: Vec<Stat>,
}

/// One headline number.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Stat {
    /// What is counted
    pub label: String,
    /// The number, as display text
    pub value: String,
    /// Small print under the number
    pub sublabel: String,
}

/// Opening section with text and an optional image.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IntroSectionProps {
    /// Section heading
    pub heading: String,
    /// Body text
    pub text: String,
    /// Side image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Section button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<Cta>,
}

/// Text beside an image.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SplitFeatureProps {
    /// Section heading
    pub heading: String,
    /// Body text
    pub text: String,
    /// Side image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Image on the left instead of the right
    pub reverse: bool,
}

/// Row of value badges.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValueBadgesProps {
    /// Section heading
    pub heading: String,
    /// Badges in display order
    pub items: Vec<Badge>,
}

/// One value badge.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Badge {
    /// Badge text
    pub label: String,
    /// Small print
    pub sub: String,
}

/// Shared by `CTASection` and `BookingCTA`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CallToActionProps {
    /// Section heading
    pub heading: String,
    /// Supporting line
    pub subheading: String,
    /// Main button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<Cta>,
    /// Second button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Cta>,
    /// Background image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Image>,
}

/// Newsletter sign-up box.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSignupProps {
    /// Section heading
    pub heading: String,
    /// Supporting line
    pub subheading: String,
    /// Email input placeholder
    pub placeholder: String,
    /// Submit button text
    pub submit_label: String,
}

/// Spacer between sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DividerProps {
    /// Vertical spacing
    pub size: DividerSize,
}

/// Vertical spacing of a divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerSize {
    /// Small
    Sm,
    /// Medium
    #[default]
    Md,
    /// Large
    Lg,
}

impl DividerSize {
    /// Parses `sm`/`md`/`lg`; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sm" => Some(DividerSize::Sm),
            "md" => Some(DividerSize::Md),
            "lg" => Some(DividerSize::Lg),
            _ => None,
        }
    }
}

/// Numbered how-it-works steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StepsProps {
    /// Section heading
    pub heading: String,
    /// Steps in order
    pub items: Vec<Step>,
}

/// One step.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Step {
    /// Step title
    pub title: String,
    /// Step description
    pub text: String,
}

/// Team member cards.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TeamProps {
    /// Section heading
    pub heading: String,
    /// Members in display order
    pub members: Vec<Member>,
}

/// One team member.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Member {
    /// Full name
    pub name: String,
    /// Job title
    pub role: String,
    /// Portrait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Image>,
    /// Short bio
    pub bio: String,
}

/// Shared by `PressLogos` and `CustomersLogos`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LogoStripProps {
    /// Section heading
    pub heading: String,
    /// Logos, deduplicated by source
    pub logos: Vec<Image>,
}

/// One featured quote.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TestimonialHighlightProps {
    /// Quote text
    pub quote: String,
    /// Who said it
    pub author: String,
    /// Author's role or company
    pub role: String,
    /// Author photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Image>,
}

/// Row of social media links.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SocialStripProps {
    /// Links in display order
    pub items: Vec<SocialLink>,
}

/// One social media link.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SocialLink {
    /// Platform name
    pub label: String,
    /// Icon name or emoji
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Profile URL, `"#"` when none was given
    pub href: String,
}

/// Site footer.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FooterProps {
    /// Footer line, usually the copyright
    pub text: String,
    /// Footer links
    pub links: Vec<Link>,
}

// ── Restaurant ──────────────────────────────────────────────

/// Menu grouped by category.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RestaurantMenuProps {
    /// Section heading
    pub heading: String,
    /// Categories in menu order
    pub categories: Vec<MenuCategory>,
}

/// One menu category.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MenuCategory {
    /// Category name
    pub name: String,
    /// Dishes in menu order
    pub items: Vec<MenuItem>,
}

/// One menu line.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MenuItem {
    /// Dish name
    pub name: String,
    /// Description
    pub desc: String,
    /// Display price
    pub price: String,
}

/// Shared by `SpecialsCarousel` and `DishGrid`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DishListProps {
    /// Section heading
    pub heading: String,
    /// Dishes in display order
    pub items: Vec<Dish>,
}

/// One dish card.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dish {
    /// Dish name
    pub title: String,
    /// Description
    pub desc: String,
    /// Display price
    pub price: String,
    /// Dish photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

/// Row of awards and ratings.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AwardsBarProps {
    /// Section heading
    pub heading: String,
    /// Awards in display order
    pub items: Vec<Award>,
}

/// One award or rating.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Award {
    /// Award name
    pub label: String,
    /// Rating or year
    pub value: String,
    /// Icon URL or emoji
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Chef profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChefBioProps {
    /// Section heading
    pub heading: String,
    /// Chef's name
    pub name: String,
    /// Kitchen role
    pub role: String,
    /// Portrait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Image>,
    /// Biography
    pub bio: String,
    /// Social profile links
    pub social: Vec<Link>,
}

/// Opening hours table.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HoursProps {
    /// Section heading
    pub heading: String,
    /// Rows in display order
    pub items: Vec<HoursRow>,
}

/// Opening hours for one day or range of days.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HoursRow {
    /// Day label, e.g. `"Mon"` or `"Mon–Fri"`
    pub day: String,
    /// Opening time as given
    pub open: String,
    /// Closing time as given
    pub close: String,
}

/// Address block with an embedded map.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMapProps {
    /// Section heading
    pub heading: String,
    /// Street address
    pub address_line1: String,
    /// City, postcode
    pub address_line2: String,
    /// Phone number
    pub phone: String,
    /// Map embed URL
    pub map_iframe_src: String,
}

/// Private dining promotion.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PrivateDiningProps {
    /// Section heading
    pub heading: String,
    /// Body text
    pub text: String,
    /// Room photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Selling points
    pub highlights: Vec<String>,
    /// Enquiry button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<Cta>,
}

/// Catering promotion.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CateringProps {
    /// Section heading
    pub heading: String,
    /// Body text
    pub text: String,
    /// Promotion photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Featured dishes
    pub menu_highlights: Vec<String>,
    /// Enquiry button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<Cta>,
}

/// Wine list teaser.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WineListHighlightProps {
    /// Section heading
    pub heading: String,
    /// Body text
    pub text: String,
    /// Cellar photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Wine list download link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<Cta>,
}

/// Several locations with maps.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MapListProps {
    /// Section heading
    pub heading: String,
    /// Locations in display order
    pub locations: Vec<Location>,
}

/// One location.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Location name
    pub name: String,
    /// Street address
    pub address: String,
    /// Phone number
    pub phone: String,
    /// Map embed URL
    pub map_iframe_src: String,
}

// ── Verticals (health, real estate, education, jobs, commerce) ──

/// Doctor profiles.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DoctorCardProps {
    /// Section heading
    pub heading: String,
    /// Doctors in display order
    pub doctors: Vec<Doctor>,
}

/// One doctor.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Doctor {
    /// Full name
    pub name: String,
    /// Medical specialty
    pub specialty: String,
    /// Short bio
    pub bio: String,
    /// Portrait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

/// Appointment slots.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AppointmentListProps {
    /// Section heading
    pub heading: String,
    /// Slots in display order
    pub appointments: Vec<Appointment>,
}

/// One appointment slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Appointment {
    /// Date as given
    pub date: String,
    /// Time as given
    pub time: String,
    /// Doctor's name
    pub doctor: String,
}

/// Property listings.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PropertyListProps {
    /// Section heading
    pub heading: String,
    /// Listings in display order
    pub properties: Vec<Property>,
}

/// One property listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Property {
    /// Listing title
    pub title: String,
    /// Neighbourhood or address
    pub location: String,
    /// Display price
    pub price: String,
    /// Listing photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

/// Embedded property map.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMapProps {
    /// Section heading
    pub heading: String,
    /// Map embed URL
    pub map_url: String,
}

/// Course catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CourseListProps {
    /// Section heading
    pub heading: String,
    /// Courses in display order
    pub courses: Vec<Course>,
}

/// One course.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Course {
    /// Course title
    pub title: String,
    /// Instructor's name
    pub instructor: String,
    /// Description
    pub desc: String,
    /// Display price
    pub price: String,
}

/// Week-by-week syllabus.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CourseSyllabusProps {
    /// Section heading
    pub heading: String,
    /// Weeks in order
    pub weeks: Vec<Week>,
}

/// One syllabus week.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Week {
    /// Week title
    pub title: String,
    /// Topics covered
    pub topics: Vec<String>,
}

/// Job openings.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct JobListProps {
    /// Section heading
    pub heading: String,
    /// Openings in display order
    pub jobs: Vec<Job>,
}

/// One job opening.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Job {
    /// Job title
    pub title: String,
    /// Office or remote
    pub location: String,
    /// Description
    pub desc: String,
}

/// Normalized props for one component, one variant per catalog kind.
///
/// Serializes as the bare props object; the component type travels alongside.
/// Variants are named after the kind they were produced for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CanonicalProps {
    /// `Header`
    Header(HeaderProps),
    /// `Hero`
    Hero(HeroProps),
    /// `FeatureGrid`
    FeatureGrid(FeatureGridProps),
    /// `ProductGrid`
    ProductGrid(ProductGridProps),
    /// `Pricing`
    Pricing(PricingProps),
    /// `Testimonials`
    Testimonials(TestimonialsProps),
    /// `FAQ`
    Faq(FaqProps),
    /// `Gallery`
    Gallery(GalleryProps),
    /// `Contact`
    Contact(FormProps),
    /// `BlogList`
    BlogList(BlogListProps),
    /// `CartSummary`
    CartSummary(CartSummaryProps),
    /// `EventList`
    EventList(EventListProps),
    /// `Stats`
    Stats(StatsProps),
    /// `ReservationForm`
    ReservationForm(FormProps),
    /// `RestaurantMenu`
    RestaurantMenu(RestaurantMenuProps),
    /// `DoctorCard`
    DoctorCard(DoctorCardProps),
    /// `AppointmentList`
    AppointmentList(AppointmentListProps),
    /// `IntroSection`
    IntroSection(IntroSectionProps),
    /// `SplitFeature`
    SplitFeature(SplitFeatureProps),
    /// `ValueBadges`
    ValueBadges(ValueBadgesProps),
    /// `CTASection`
    CtaSection(CallToActionProps),
    /// `NewsletterSignup`
    NewsletterSignup(NewsletterSignupProps),
    /// `PrivateDining`
    PrivateDining(PrivateDiningProps),
    /// `Catering`
    Catering(CateringProps),
    /// `WineListHighlight`
    WineListHighlight(WineListHighlightProps),
    /// `MapList`
    MapList(MapListProps),
    /// `Divider`
    Divider(DividerProps),
    /// `PropertyList`
    PropertyList(PropertyListProps),
    /// `PropertyMap`
    PropertyMap(PropertyMapProps),
    /// `CourseList`
    CourseList(CourseListProps),
    /// `CourseSyllabus`
    CourseSyllabus(CourseSyllabusProps),
    /// `JobList`
    JobList(JobListProps),
    /// `Team`
    Team(TeamProps),
    /// `Steps`
    Steps(StepsProps),
    /// `CheckoutForm`
    CheckoutForm(FormProps),
    /// `SpecialsCarousel`
    SpecialsCarousel(DishListProps),
    /// `PressLogos`
    PressLogos(LogoStripProps),
    /// `CustomersLogos`
    CustomersLogos(LogoStripProps),
    /// `AwardsBar`
    AwardsBar(AwardsBarProps),
    /// `ChefBio`
    ChefBio(ChefBioProps),
    /// `DishGrid`
    DishGrid(DishListProps),
    /// `BookingCTA`
    BookingCta(CallToActionProps),
    /// `Hours`
    Hours(HoursProps),
    /// `LocationMap`
    LocationMap(LocationMapProps),
    /// `TestimonialHighlight`
    TestimonialHighlight(TestimonialHighlightProps),
    /// `SocialStrip`
    SocialStrip(SocialStripProps),
    /// `Footer`
    Footer(FooterProps),
    /// Output of a registered extension rule.
    Extension(Map<String, Value>),
    /// Props of a type with no rule, returned unchanged.
    Passthrough(Map<String, Value>),
}

impl CanonicalProps {
    /// The catalog kind this value was produced for, `None` for extension and
    /// pass-through props.
    pub fn kind(&self) -> Option<ComponentKind> {
        use CanonicalProps as P;
        use ComponentKind as K;
        let kind = match self {
            P::Header(_) => K::Header,
            P::Hero(_) => K::Hero,
            P::FeatureGrid(_) => K::FeatureGrid,
            P::ProductGrid(_) => K::ProductGrid,
            P::Pricing(_) => K::Pricing,
            P::Testimonials(_) => K::Testimonials,
            P::Faq(_) => K::Faq,
            P::Gallery(_) => K::Gallery,
            P::Contact(_) => K::Contact,
            P::BlogList(_) => K::BlogList,
            P::CartSummary(_) => K::CartSummary,
            P::EventList(_) => K::EventList,
            P::Stats(_) => K::Stats,
            P::ReservationForm(_) => K::ReservationForm,
            P::RestaurantMenu(_) => K::RestaurantMenu,
            P::DoctorCard(_) => K::DoctorCard,
            P::AppointmentList(_) => K::AppointmentList,
            P::IntroSection(_) => K::IntroSection,
            P::SplitFeature(_) => K::SplitFeature,
            P::ValueBadges(_) => K::ValueBadges,
            P::CtaSection(_) => K::CtaSection,
            P::NewsletterSignup(_) => K::NewsletterSignup,
            P::PrivateDining(_) => K::PrivateDining,
            P::Catering(_) => K::Catering,
            P::WineListHighlight(_) => K::WineListHighlight,
            P::MapList(_) => K::MapList,
            P::Divider(_) => K::Divider,
            P::PropertyList(_) => K::PropertyList,
            P::PropertyMap(_) => K::PropertyMap,
            P::CourseList(_) => K::CourseList,
            P::CourseSyllabus(_) => K::CourseSyllabus,
            P::JobList(_) => K::JobList,
            P::Team(_) => K::Team,
            P::Steps(_) => K::Steps,
            P::CheckoutForm(_) => K::CheckoutForm,
            P::SpecialsCarousel(_) => K::SpecialsCarousel,
            P::PressLogos(_) => K::PressLogos,
            P::CustomersLogos(_) => K::CustomersLogos,
            P::AwardsBar(_) => K::AwardsBar,
            P::ChefBio(_) => K::ChefBio,
            P::DishGrid(_) => K::DishGrid,
            P::BookingCta(_) => K::BookingCta,
            P::Hours(_) => K::Hours,
            P::LocationMap(_) => K::LocationMap,
            P::TestimonialHighlight(_) => K::TestimonialHighlight,
            P::SocialStrip(_) => K::SocialStrip,
            P::Footer(_) => K::Footer,
            P::Extension(_) | P::Passthrough(_) => return None,
        };
        Some(kind)
    }

    /// Serializes to a JSON object.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_fields_are_omitted() {
        let props = CanonicalProps::Hero(HeroProps {
            title: "T".into(),
            subtitle: String::new(),
            primary_cta: None,
            image: None,
        });
        assert_eq!(props.to_value(), json!({"title": "T", "subtitle": ""}));
    }

    #[test]
    fn keys_are_camel_case() {
        let props = CanonicalProps::LocationMap(LocationMapProps {
            address_line1: "1 Main St".into(),
            ..Default::default()
        });
        let value = props.to_value();
        assert_eq!(value["addressLine1"], "1 Main St");
        assert!(value.get("mapIframeSrc").is_some());
    }

    #[test]
    fn divider_size_serializes_lowercase() {
        let props = CanonicalProps::Divider(DividerProps {
            size: DividerSize::Lg,
        });
        assert_eq!(props.to_value(), json!({"size": "lg"}));
        assert_eq!(DividerSize::parse("xl"), None);
    }

    #[test]
    fn passthrough_has_no_kind() {
        let props = CanonicalProps::Passthrough(Map::new());
        assert_eq!(props.kind(), None);
        assert_eq!(props.to_value(), json!({}));
        assert_eq!(
            CanonicalProps::Faq(FaqProps::default()).kind(),
            Some(ComponentKind::Faq)
        );
    }
}
