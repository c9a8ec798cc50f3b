//! Rules for commerce, health, real estate, education and hiring blocks.

use crate::canonical::*;
use crate::coerce;
use crate::fields::Fields;

use super::{HEADING, entries, form};

pub(super) fn product_grid(f: &Fields<'_>) -> ProductGridProps {
    ProductGridProps {
        heading: f.text(HEADING, ""),
        items: coerce::objects(f.list(&["items", "products"]), |product| Product {
            title: product.text(&["title", "name"], ""),
            image: product.pick_with(&["image", "src", "photo"], coerce::image),
            price: coerce::price(product.get("price")),
        }),
    }
}

pub(super) fn cart_summary(f: &Fields<'_>) -> CartSummaryProps {
    CartSummaryProps {
        subtotal: coerce::price(f.get("subtotal")),
        shipping: coerce::price(f.get("shipping")),
        total: coerce::price(f.get("total")),
        checkout_cta: f.pick_with(&["checkoutCta", "cta"], coerce::link),
    }
}

pub(super) fn checkout_form(f: &Fields<'_>) -> FormProps {
    form(f, "Checkout", &["name", "email", "address", "card"], "Pay")
}

pub(super) fn doctor_card(f: &Fields<'_>) -> DoctorCardProps {
    DoctorCardProps {
        heading: f.text(HEADING, "Our Doctors"),
        doctors: coerce::objects(f.list(&["doctors", "items"]), |doctor| Doctor {
            name: doctor.text(&["name"], ""),
            specialty: doctor.text(&["specialty", "role"], ""),
            bio: doctor.text(&["bio"], ""),
            image: doctor.pick_with(&["image", "photo"], coerce::image),
        }),
    }
}

pub(super) fn appointment_list(f: &Fields<'_>) -> AppointmentListProps {
    AppointmentListProps {
        heading: f.text(HEADING, "Available Appointments"),
        appointments: coerce::objects(
            f.list(&["appointments", "items", "slots"]),
            |slot| Appointment {
                date: slot.text(&["date"], ""),
                time: slot.text(&["time"], ""),
                doctor: slot.text(&["doctor"], ""),
            },
        ),
    }
}

pub(super) fn property_list(f: &Fields<'_>) -> PropertyListProps {
    PropertyListProps {
        heading: f.text(HEADING, "Available Properties"),
        properties: coerce::objects(
            f.list(&["properties", "listings", "items"]),
            |property| Property {
                title: property.text(&["title"], ""),
                location: property.text(&["location", "address"], ""),
                price: coerce::price(property.get("price")),
                image: property.pick_with(&["image"], coerce::image),
            },
        ),
    }
}

pub(super) fn property_map(f: &Fields<'_>) -> PropertyMapProps {
    PropertyMapProps {
        heading: f.text(HEADING, "Property Locations"),
        map_url: f.text(&["mapUrl", "mapIframeSrc", "src"], ""),
    }
}

pub(super) fn course_list(f: &Fields<'_>) -> CourseListProps {
    CourseListProps {
        heading: f.text(HEADING, "Our Courses"),
        courses: coerce::objects(f.list(&["courses", "items"]), |course| Course {
            title: course.text(&["title"], ""),
            instructor: course.text(&["instructor"], ""),
            desc: course.text(&["desc", "description"], ""),
            price: coerce::price(course.get("price")),
        }),
    }
}

pub(super) fn course_syllabus(f: &Fields<'_>) -> CourseSyllabusProps {
    CourseSyllabusProps {
        heading: f.text(HEADING, "Course Syllabus"),
        weeks: entries(
            f.list(&["weeks", "modules", "items"]),
            |week| Week {
                title: week.text(&["title"], ""),
                topics: coerce::string_list(week.list(&["topics"])),
            },
            |title| Week {
                title,
                topics: Vec::new(),
            },
        ),
    }
}

pub(super) fn job_list(f: &Fields<'_>) -> JobListProps {
    JobListProps {
        heading: f.text(HEADING, "Job Openings"),
        jobs: coerce::objects(f.list(&["jobs", "positions", "items"]), |job| Job {
            title: job.text(&["title"], ""),
            location: job.text(&["location"], ""),
            desc: job.text(&["desc", "description"], ""),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cart_summary_formats_every_amount() {
        let props = json!({"subtotal": 40, "shipping": "Free", "total": 40.0, "cta": "Checkout"});
        let cart = cart_summary(&Fields::new(&props));
        assert_eq!(cart.subtotal, "$40.00");
        assert_eq!(cart.shipping, "Free");
        assert_eq!(cart.total, "$40.00");
        assert_eq!(cart.checkout_cta.unwrap().label, "Checkout");
    }

    #[test]
    fn product_grid_lifts_src_to_image() {
        let props = json!({"products": [{"name": "Mug", "src": "https://cdn.test/mug.png", "price": 8}]});
        let grid = product_grid(&Fields::new(&props));
        let product = &grid.items[0];
        assert_eq!(product.title, "Mug");
        assert_eq!(product.image.as_ref().unwrap().src, "https://cdn.test/mug.png");
        assert_eq!(product.price, "$8.00");
    }

    #[test]
    fn doctor_card_reads_role_as_specialty() {
        let props = json!({"items": [{"name": "Dr. Ada", "role": "Cardiology"}]});
        let card = doctor_card(&Fields::new(&props));
        assert_eq!(card.heading, "Our Doctors");
        assert_eq!(card.doctors[0].specialty, "Cardiology");
    }

    #[test]
    fn syllabus_accepts_module_strings() {
        let props = json!({"modules": ["Intro", {"title": "Deep dive", "topics": ["a", "b"]}]});
        let syllabus = course_syllabus(&Fields::new(&props));
        assert_eq!(syllabus.weeks[0].title, "Intro");
        assert_eq!(syllabus.weeks[1].topics, vec!["a", "b"]);
    }

    #[test]
    fn property_map_url_aliases() {
        let props = json!({"src": "https://maps.test/embed"});
        assert_eq!(property_map(&Fields::new(&props)).map_url, "https://maps.test/embed");
    }

    #[test]
    fn checkout_defaults() {
        let form = checkout_form(&Fields::new(&json!({})));
        assert_eq!(form.heading, "Checkout");
        assert_eq!(form.fields, vec!["name", "email", "address", "card"]);
        assert_eq!(form.submit_label, "Pay");
    }
}
