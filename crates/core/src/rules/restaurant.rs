//! Rules for restaurant and hospitality blocks.

use serde_json::Value;

use crate::canonical::*;
use crate::coerce;
use crate::fields::Fields;

use super::{HEADING, entries, form};

const PRIVATE_DINING_TEXT: &str =
    "Host intimate gatherings, celebrations, or corporate events in our private spaces.";
const CATERING_TEXT: &str =
    "Full-service catering for weddings, corporate events, and private parties.";
const WINE_LIST_TEXT: &str =
    "Curated old-world and new-world selections with a focus on small producers.";

pub(super) fn reservation_form(f: &Fields<'_>) -> FormProps {
    let mut props = form(
        f,
        "Make a Reservation",
        &["name", "email", "phone", "date", "time", "guests"],
        "Book Now",
    );
    for field in &mut props.fields {
        if *field == "partySize" {
            *field = "guests".to_string();
        }
    }
    props
}

pub(super) fn restaurant_menu(f: &Fields<'_>) -> RestaurantMenuProps {
    RestaurantMenuProps {
        heading: f.text(HEADING, "Our Menu"),
        categories: coerce::objects(f.list(&["categories", "sections"]), |category| {
            MenuCategory {
                name: category.text(&["name", "title"], ""),
                items: coerce::objects(category.list_or_single(&["items"]), |item| MenuItem {
                    name: item.text(&["name", "title"], ""),
                    desc: item.text(&["desc", "description"], ""),
                    price: coerce::price(item.get("price")),
                }),
            }
        }),
    }
}

pub(super) fn private_dining(f: &Fields<'_>) -> PrivateDiningProps {
    PrivateDiningProps {
        heading: f.text(HEADING, "Private Dining"),
        text: f.text(&["text", "body", "description"], PRIVATE_DINING_TEXT),
        image: f.pick_with(&["image"], coerce::image),
        highlights: coerce::string_list(f.list(&["highlights"])),
        cta: f.pick_with(&["cta", "primaryCta"], coerce::link),
    }
}

pub(super) fn catering(f: &Fields<'_>) -> CateringProps {
    CateringProps {
        heading: f.text(HEADING, "Catering"),
        text: f.text(&["text", "body", "description"], CATERING_TEXT),
        image: f.pick_with(&["image"], coerce::image),
        menu_highlights: coerce::string_list(f.list(&["menuHighlights", "highlights"])),
        cta: f.pick_with(&["cta", "primaryCta"], coerce::link),
    }
}

pub(super) fn wine_list_highlight(f: &Fields<'_>) -> WineListHighlightProps {
    WineListHighlightProps {
        heading: f.text(HEADING, "Our Wine Program"),
        text: f.text(&["text", "body", "description"], WINE_LIST_TEXT),
        image: f.pick_with(&["image"], coerce::image),
        download: f.pick_with(&["download", "cta"], coerce::link),
    }
}

pub(super) fn map_list(f: &Fields<'_>) -> MapListProps {
    MapListProps {
        heading: f.text(HEADING, "Our Locations"),
        locations: coerce::objects(f.list(&["locations", "items"]), |location| Location {
            name: location.text(&["name"], ""),
            address: location.text(&["address"], ""),
            phone: location.text(&["phone"], ""),
            map_iframe_src: location.text(&["mapIframeSrc", "mapUrl", "map"], ""),
        }),
    }
}

fn dish(item: &Fields<'_>, desc_aliases: &[&str]) -> Dish {
    Dish {
        title: item.text(&["title", "name"], ""),
        desc: item.text(desc_aliases, ""),
        price: coerce::price(item.get("price")),
        image: item.pick_with(&["image"], coerce::image),
    }
}

pub(super) fn specials_carousel(f: &Fields<'_>) -> DishListProps {
    DishListProps {
        heading: f.text(HEADING, "Daily Specials"),
        items: coerce::objects(f.list(&["items", "specials"]), |item| {
            dish(item, &["desc", "text", "subtitle", "description"])
        }),
    }
}

pub(super) fn dish_grid(f: &Fields<'_>) -> DishListProps {
    DishListProps {
        heading: f.text(HEADING, "Featured Dishes"),
        items: coerce::objects(f.list(&["items", "dishes"]), |item| {
            dish(item, &["desc", "description"])
        }),
    }
}

/// Award rows come from `items`; a logo list is the fallback source.
pub(super) fn awards_bar(f: &Fields<'_>) -> AwardsBarProps {
    let items = if f.has_list(&["items"]) {
        entries(
            f.list(&["items"]),
            |item| Award {
                label: item.text(&["label", "title"], ""),
                value: item.text(&["value"], ""),
                icon: item.pick_with(&["icon"], award_icon),
            },
            |label| Award {
                label,
                ..Award::default()
            },
        )
    } else {
        coerce::list_of(f.list(&["logos"]), |logo| match logo {
            Value::Object(_) => {
                let logo = Fields::new(logo);
                Some(Award {
                    label: logo.text(&["alt"], ""),
                    value: String::new(),
                    icon: logo.pick_with(&["src"], award_icon),
                })
            }
            other => award_icon(other).map(|src| Award {
                icon: Some(src),
                ..Award::default()
            }),
        })
    };
    AwardsBarProps {
        heading: f.text(HEADING, "Awards & Recognition"),
        items,
    }
}

fn award_icon(value: &Value) -> Option<String> {
    coerce::image(value).map(|image| image.src)
}

pub(super) fn chef_bio(f: &Fields<'_>) -> ChefBioProps {
    ChefBioProps {
        heading: f.text(HEADING, ""),
        name: f.text(&["name"], ""),
        role: f.text(&["role"], ""),
        photo: f.pick_with(&["photo", "image", "avatar"], coerce::image),
        bio: f.text(&["bio", "text", "description"], ""),
        social: coerce::list_of(f.list(&["social", "links"]), coerce::link),
    }
}

pub(super) fn booking_cta(f: &Fields<'_>) -> CallToActionProps {
    CallToActionProps {
        heading: f.text(HEADING, ""),
        subheading: f.text(&["subheading", "subtitle", "text"], ""),
        primary: f.pick_with(&["primary", "cta", "primaryCta"], coerce::link),
        secondary: f.pick_with(&["secondary", "secondaryCta"], coerce::link),
        background: f.pick_with(&["background", "image"], coerce::image),
    }
}

/// Rows from `items`, `days` or `hours`. Explicit `open`/`close` win over a
/// `time` range.
pub(super) fn hours(f: &Fields<'_>) -> HoursProps {
    HoursProps {
        heading: f.text(HEADING, "Hours of Operation"),
        items: coerce::objects(f.list(&["items", "days", "hours"]), |row| {
            let (open, close) = if row.has("open") || row.has("close") {
                (row.text(&["open"], ""), row.text(&["close"], ""))
            } else {
                coerce::split_time_range(&row.text(&["time", "hours"], ""))
            };
            HoursRow {
                day: row.text(&["day", "days", "label"], ""),
                open,
                close,
            }
        }),
    }
}

pub(super) fn location_map(f: &Fields<'_>) -> LocationMapProps {
    LocationMapProps {
        heading: f.text(HEADING, "Find Us"),
        address_line1: f.text(&["addressLine1", "address"], ""),
        address_line2: f.text(&["addressLine2"], ""),
        phone: f.text(&["phone"], ""),
        map_iframe_src: f.text(&["mapIframeSrc", "mapUrl", "map"], ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hours_splits_day_time_ranges() {
        let props = json!({"days": [{"day": "Mon", "time": "6pm-10pm"}]});
        let hours = hours(&Fields::new(&props));
        assert_eq!(hours.heading, "Hours of Operation");
        assert_eq!(
            hours.items,
            vec![HoursRow {
                day: "Mon".into(),
                open: "6pm".into(),
                close: "10pm".into(),
            }]
        );
    }

    #[test]
    fn hours_prefers_explicit_open_close() {
        let props = json!({"items": [{"day": "Tue", "open": "9am", "time": "1-2"}]});
        let row = &hours(&Fields::new(&props)).items[0];
        assert_eq!(row.open, "9am");
        assert_eq!(row.close, "");
    }

    #[test]
    fn hours_items_win_over_days() {
        let props = json!({
            "items": [{"day": "Wed", "open": "8", "close": "4"}],
            "days": [{"day": "Thu", "time": "1-2"}]
        });
        let items = hours(&Fields::new(&props)).items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].day, "Wed");
    }

    #[test]
    fn reservation_form_renames_party_size() {
        let props = json!({"fields": ["name", "partySize"]});
        let form = reservation_form(&Fields::new(&props));
        assert_eq!(form.fields, vec!["name", "guests"]);
        assert_eq!(form.submit_label, "Book Now");
    }

    #[test]
    fn menu_accepts_sections_and_single_items() {
        let props = json!({
            "sections": [{"title": "Mains", "items": {"name": "Steak", "price": 30}}]
        });
        let menu = restaurant_menu(&Fields::new(&props));
        assert_eq!(menu.heading, "Our Menu");
        assert_eq!(menu.categories[0].name, "Mains");
        assert_eq!(menu.categories[0].items[0].price, "$30.00");
    }

    #[test]
    fn dish_grid_formats_prices() {
        let props = json!({"items": [{"price": 12.5}, {"price": "Market"}, {"price": false}]});
        let prices: Vec<String> = dish_grid(&Fields::new(&props))
            .items
            .into_iter()
            .map(|dish| dish.price)
            .collect();
        assert_eq!(prices, vec!["$12.50", "Market", ""]);
    }

    #[test]
    fn awards_bar_falls_back_to_logos() {
        let props = json!({"logos": [{"src": "https://cdn.test/michelin.png", "alt": "Michelin"}]});
        let bar = awards_bar(&Fields::new(&props));
        assert_eq!(bar.items[0].label, "Michelin");
        assert_eq!(bar.items[0].value, "");
        assert_eq!(bar.items[0].icon.as_deref(), Some("https://cdn.test/michelin.png"));

        let props = json!({"items": [{"label": "Best Pizza", "value": "2024"}], "logos": ["x.png"]});
        let bar = awards_bar(&Fields::new(&props));
        assert_eq!(bar.items.len(), 1);
        assert_eq!(bar.items[0].label, "Best Pizza");
    }

    #[test]
    fn default_copy_fills_empty_blocks() {
        let empty = json!({});
        assert_eq!(private_dining(&Fields::new(&empty)).text, PRIVATE_DINING_TEXT);
        assert_eq!(catering(&Fields::new(&empty)).text, CATERING_TEXT);
        assert_eq!(wine_list_highlight(&Fields::new(&empty)).text, WINE_LIST_TEXT);
    }
}
