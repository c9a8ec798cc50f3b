//! Rules for the general-purpose blocks every site type uses.

use crate::canonical::*;
use crate::coerce::{self, DEFAULT_HREF};
use crate::fields::Fields;

use super::{HEADING, entries, form, nav_links};

pub(super) fn header(f: &Fields<'_>) -> HeaderProps {
    HeaderProps {
        logo_text: f.text(&["logoText", "brand", "title"], "Brand"),
        links: nav_links(f.list(&["links", "navigation"])),
        cta: f.pick_with(&["cta", "primaryCta"], coerce::link),
    }
}

pub(super) fn hero(f: &Fields<'_>) -> HeroProps {
    let image = f
        .pick_with(&["image", "backgroundImage", "background"], coerce::image)
        .map(|mut image| {
            if image.alt.is_empty() {
                if let Some(alt) = f.opt_text(&["alt"]) {
                    image.alt = alt;
                }
            }
            image
        });
    HeroProps {
        title: f.text(&["title", "heading"], "Your headline"),
        subtitle: f.text(&["subtitle", "subheading"], ""),
        primary_cta: f.pick_with(&["primaryCta", "cta"], coerce::link),
        image,
    }
}

pub(super) fn feature_grid(f: &Fields<'_>) -> FeatureGridProps {
    FeatureGridProps {
        heading: f.text(HEADING, ""),
        items: entries(
            f.list(&["items", "features"]),
            |item| Feature {
                icon: item.opt_text(&["icon"]),
                title: item.text(&["title", "name", "label"], ""),
                text: item.text(&["text", "desc", "description"], ""),
            },
            |title| Feature {
                title,
                ..Feature::default()
            },
        ),
    }
}

pub(super) fn pricing(f: &Fields<'_>) -> PricingProps {
    PricingProps {
        heading: f.text(HEADING, "Pricing"),
        plans: coerce::objects(f.list(&["plans", "tiers", "items"]), |plan| Plan {
            name: plan.text(&["name", "title"], ""),
            price: coerce::price(plan.get("price")),
            features: coerce::string_list(plan.list(&["features"])),
            cta: plan.pick_with(&["cta"], coerce::link),
        }),
    }
}

pub(super) fn testimonials(f: &Fields<'_>) -> TestimonialsProps {
    TestimonialsProps {
        heading: f.text(HEADING, ""),
        items: coerce::objects(f.list(&["items", "testimonials"]), |t| Testimonial {
            quote: t.text(&["quote", "text"], ""),
            author: t.text(&["author", "name"], ""),
            role: t.text(&["role"], ""),
            avatar: t.pick_with(&["avatar"], coerce::image),
        }),
    }
}

pub(super) fn faq(f: &Fields<'_>) -> FaqProps {
    FaqProps {
        heading: f.text(HEADING, "FAQ"),
        items: coerce::objects(f.list(&["items", "questions", "faqs"]), |item| FaqItem {
            q: item.text(&["q", "question", "title"], ""),
            a: item.text(&["a", "answer", "desc", "text"], ""),
        }),
    }
}

pub(super) fn gallery(f: &Fields<'_>) -> GalleryProps {
    GalleryProps {
        heading: f.text(HEADING, ""),
        images: f.images(&["images", "items", "photos"]),
    }
}

pub(super) fn contact(f: &Fields<'_>) -> FormProps {
    form(f, "Contact Us", &["name", "email", "message"], "Send")
}

pub(super) fn blog_list(f: &Fields<'_>) -> BlogListProps {
    BlogListProps {
        heading: f.text(HEADING, ""),
        items: coerce::objects(f.list(&["items", "posts"]), |post| Post {
            title: post.text(&["title"], ""),
            excerpt: post.text(&["excerpt", "summary", "desc", "text"], ""),
            href: post.opt_text(&["href", "url", "link"]),
        }),
    }
}

pub(super) fn event_list(f: &Fields<'_>) -> EventListProps {
    EventListProps {
        heading: f.text(HEADING, ""),
        items: coerce::objects(f.list(&["items", "events"]), |event| Event {
            title: event.text(&["title", "name"], ""),
            date: event.text(&["date"], ""),
            location: event.text(&["location", "venue"], ""),
        }),
    }
}

pub(super) fn stats(f: &Fields<'_>) -> StatsProps {
    StatsProps {
        heading: f.text(HEADING, ""),
        items: coerce::objects(f.list(&["items", "stats"]), |stat| Stat {
            label: stat.text(&["label"], ""),
            value: stat.text(&["value"], ""),
            sublabel: stat.text(&["sublabel", "sub", "description"], ""),
        }),
    }
}

pub(super) fn intro_section(f: &Fields<'_>) -> IntroSectionProps {
    IntroSectionProps {
        heading: f.text(HEADING, "About Us"),
        text: f.text(&["text", "body", "description"], ""),
        image: f.pick_with(&["image"], coerce::image),
        cta: f.pick_with(&["cta", "primary", "primaryCta"], coerce::link),
    }
}

pub(super) fn split_feature(f: &Fields<'_>) -> SplitFeatureProps {
    SplitFeatureProps {
        heading: f.text(HEADING, ""),
        text: f.text(&["text", "body", "description"], ""),
        image: f.pick_with(&["image"], coerce::image),
        reverse: f.flag(&["reverse"]),
    }
}

pub(super) fn value_badges(f: &Fields<'_>) -> ValueBadgesProps {
    ValueBadgesProps {
        heading: f.text(HEADING, ""),
        items: entries(
            f.list(&["items", "badges"]),
            |badge| Badge {
                label: badge.text(&["label", "title"], ""),
                sub: badge.text(&["sub", "text"], ""),
            },
            |label| Badge {
                label,
                sub: String::new(),
            },
        ),
    }
}

pub(super) fn cta_section(f: &Fields<'_>) -> CallToActionProps {
    CallToActionProps {
        heading: f.text(HEADING, ""),
        subheading: f.text(&["subheading", "text", "subtitle"], ""),
        primary: f.pick_with(&["primary", "cta", "primaryCta"], coerce::link),
        secondary: f.pick_with(&["secondary", "secondaryCta"], coerce::link),
        background: f.pick_with(&["background", "image"], coerce::image),
    }
}

pub(super) fn newsletter_signup(f: &Fields<'_>) -> NewsletterSignupProps {
    NewsletterSignupProps {
        heading: f.text(HEADING, "Get our specials"),
        subheading: f.text(&["subheading", "subtitle", "text"], ""),
        placeholder: f.text(&["placeholder"], "Your email"),
        submit_label: f.text(&["submitLabel", "buttonLabel"], "Subscribe"),
    }
}

pub(super) fn divider(f: &Fields<'_>) -> DividerProps {
    DividerProps {
        size: f
            .pick_with(&["size"], |v| v.as_str().and_then(DividerSize::parse))
            .unwrap_or_default(),
    }
}

pub(super) fn team(f: &Fields<'_>) -> TeamProps {
    TeamProps {
        heading: f.text(HEADING, ""),
        members: coerce::objects(f.list(&["members", "team", "items"]), |member| Member {
            name: member.text(&["name"], ""),
            role: member.text(&["role"], ""),
            avatar: member.pick_with(&["avatar", "image", "photo"], coerce::image),
            bio: member.text(&["bio"], ""),
        }),
    }
}

pub(super) fn steps(f: &Fields<'_>) -> StepsProps {
    StepsProps {
        heading: f.text(HEADING, ""),
        items: entries(
            f.list(&["items", "steps"]),
            |step| Step {
                title: step.text(&["title"], ""),
                text: step.text(&["text", "desc", "description"], ""),
            },
            |title| Step {
                title,
                text: String::new(),
            },
        ),
    }
}

pub(super) fn logo_strip(f: &Fields<'_>) -> LogoStripProps {
    LogoStripProps {
        heading: f.text(HEADING, ""),
        logos: f.images(&["logos", "items"]),
    }
}

pub(super) fn testimonial_highlight(f: &Fields<'_>) -> TestimonialHighlightProps {
    TestimonialHighlightProps {
        quote: f.text(&["quote", "text"], ""),
        author: f.text(&["author", "name"], ""),
        role: f.text(&["role"], ""),
        avatar: f.pick_with(&["avatar"], coerce::image),
    }
}

pub(super) fn social_strip(f: &Fields<'_>) -> SocialStripProps {
    SocialStripProps {
        items: entries(
            f.list(&["items", "links", "social"]),
            |item| SocialLink {
                label: item.text(&["label", "name", "platform"], ""),
                icon: item.opt_text(&["icon"]),
                href: item
                    .opt_text(&["href", "url", "link"])
                    .filter(|href| !href.is_empty())
                    .unwrap_or_else(|| DEFAULT_HREF.to_string()),
            },
            |label| SocialLink {
                label,
                icon: None,
                href: DEFAULT_HREF.to_string(),
            },
        ),
    }
}

pub(super) fn footer(f: &Fields<'_>) -> FooterProps {
    FooterProps {
        text: f.text(&["text", "copyright"], ""),
        links: nav_links(f.list(&["links"])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: &serde_json::Value) -> Fields<'_> {
        Fields::new(value)
    }

    #[test]
    fn hero_title_alias_precedence() {
        let props = json!({"title": "A", "heading": "B"});
        assert_eq!(hero(&fields(&props)).title, "A");
        let props = json!({"heading": "B"});
        assert_eq!(hero(&fields(&props)).title, "B");
        assert_eq!(hero(&fields(&json!({}))).title, "Your headline");
    }

    #[test]
    fn hero_applies_top_level_alt_to_bare_image() {
        let props = json!({"image": "https://cdn.test/hero.jpg", "alt": "Dining room"});
        let image = hero(&fields(&props)).image.unwrap();
        assert_eq!(image.alt, "Dining room");

        let props = json!({"image": {"src": "https://cdn.test/hero.jpg", "alt": "Own"}, "alt": "Top"});
        assert_eq!(hero(&fields(&props)).image.unwrap().alt, "Own");
    }

    #[test]
    fn header_accepts_navigation_strings() {
        let props = json!({"brand": "Bistro", "navigation": ["Menu", {"label": "Book", "href": "/book"}], "cta": "Order"});
        let header = header(&fields(&props));
        assert_eq!(header.logo_text, "Bistro");
        assert_eq!(header.links.len(), 2);
        assert_eq!(header.links[0].href, "#");
        assert_eq!(header.cta.unwrap().label, "Order");
    }

    #[test]
    fn feature_grid_lifts_strings_to_titles() {
        let props = json!({"features": ["Fast", {"name": "Cheap", "desc": "Very"}]});
        let grid = feature_grid(&fields(&props));
        assert_eq!(grid.items[0].title, "Fast");
        assert_eq!(grid.items[1].text, "Very");
    }

    #[test]
    fn faq_reads_question_aliases() {
        let props = json!({"questions": [{"question": "Open?", "answer": "Yes"}, "stray"]});
        let faq = faq(&fields(&props));
        assert_eq!(faq.heading, "FAQ");
        assert_eq!(faq.items, vec![FaqItem { q: "Open?".into(), a: "Yes".into() }]);
    }

    #[test]
    fn gallery_dedupes_and_lifts_single_images() {
        let props = json!({"images": ["a.jpg", "a.jpg", "b.jpg"]});
        let srcs: Vec<String> = gallery(&fields(&props)).images.into_iter().map(|i| i.src).collect();
        assert_eq!(srcs, vec!["a.jpg", "b.jpg"]);

        let props = json!({"photos": "solo.jpg"});
        assert_eq!(gallery(&fields(&props)).images.len(), 1);
    }

    #[test]
    fn gallery_falls_back_past_unusable_images() {
        for props in [
            json!({"images": "", "items": ["a.jpg"]}),
            json!({"images": {"caption": "x"}, "items": ["a.jpg"]}),
        ] {
            let images = gallery(&fields(&props)).images;
            assert_eq!(images.len(), 1, "{}", props);
            assert_eq!(images[0].src, "a.jpg");
        }
    }

    #[test]
    fn logo_strip_falls_back_past_unusable_logos() {
        let props = json!({"logos": {"title": "x"}, "items": ["https://a.test/l.png"]});
        let logos = logo_strip(&fields(&props)).logos;
        assert_eq!(logos.len(), 1);
        assert_eq!(logos[0].src, "https://a.test/l.png");
    }

    #[test]
    fn contact_defaults() {
        let form = contact(&fields(&json!(null)));
        assert_eq!(form.heading, "Contact Us");
        assert_eq!(form.fields, vec!["name", "email", "message"]);
        assert_eq!(form.submit_label, "Send");
    }

    #[test]
    fn divider_size_falls_back_to_medium() {
        assert_eq!(divider(&fields(&json!({"size": "lg"}))).size, DividerSize::Lg);
        assert_eq!(divider(&fields(&json!({"size": "huge"}))).size, DividerSize::Md);
        assert_eq!(divider(&fields(&json!({"size": 3}))).size, DividerSize::Md);
    }

    #[test]
    fn social_strip_defaults_href() {
        let props = json!({"social": [{"platform": "Instagram", "icon": "ig"}, "Yelp"]});
        let strip = social_strip(&fields(&props));
        assert_eq!(strip.items[0].label, "Instagram");
        assert_eq!(strip.items[0].href, "#");
        assert_eq!(strip.items[1].icon, None);
    }

    #[test]
    fn split_feature_reverse_requires_bool() {
        assert!(split_feature(&fields(&json!({"reverse": true}))).reverse);
        assert!(!split_feature(&fields(&json!({"reverse": "true"}))).reverse);
    }
}
