//! Render-time image policy for logo strips and award icons.
//!
//! Normalization keeps image sources as given; only here are sources that the
//! page cannot load swapped for the fallback image.

use sitegen_core::CanonicalProps;

use super::types::DispatchOptions;

/// Returns true for `http://` and `https://` URLs.
pub fn is_absolute_url(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://")
}

/// Replaces non-absolute logo and award icon sources with the fallback image.
pub fn apply_image_policy(props: &mut CanonicalProps, options: &DispatchOptions) {
    if !options.replace_relative_images {
        return;
    }
    let fallback = options.fallback_image.as_str();
    match props {
        CanonicalProps::PressLogos(strip) | CanonicalProps::CustomersLogos(strip) => {
            for logo in strip.logos.iter_mut().filter(|logo| !is_absolute_url(&logo.src)) {
                log::debug!("Replacing logo source `{}` with fallback image", logo.src);
                logo.src = fallback.to_string();
            }
        }
        CanonicalProps::AwardsBar(bar) => {
            for icon in bar.items.iter_mut().filter_map(|item| item.icon.as_mut()) {
                if !is_absolute_url(icon) {
                    *icon = fallback.to_string();
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sitegen_core::normalize;

    use crate::dispatch::types::FALLBACK_IMAGE;

    #[test]
    fn test_relative_logos_use_fallback() {
        let mut props = normalize(
            "PressLogos",
            &json!({"logos": ["/times.png", "https://cdn.test/post.png", "data:image/png;base64,AAA"]}),
        );
        apply_image_policy(&mut props, &DispatchOptions::default());
        let value = props.to_value();
        assert_eq!(value["logos"][0]["src"], FALLBACK_IMAGE);
        assert_eq!(value["logos"][1]["src"], "https://cdn.test/post.png");
        assert_eq!(value["logos"][2]["src"], FALLBACK_IMAGE);
    }

    #[test]
    fn test_award_icons_use_fallback() {
        let mut props = normalize(
            "AwardsBar",
            &json!({"items": [{"label": "Best", "icon": "🏆"}, {"label": "Top", "icon": "http://x.test/i.png"}, {"label": "None"}]}),
        );
        let options = DispatchOptions {
            fallback_image: "https://fallback.test/img.png".into(),
            replace_relative_images: true,
        };
        apply_image_policy(&mut props, &options);
        let value = props.to_value();
        assert_eq!(value["items"][0]["icon"], "https://fallback.test/img.png");
        assert_eq!(value["items"][1]["icon"], "http://x.test/i.png");
        assert!(value["items"][2].get("icon").is_none());
    }

    #[test]
    fn test_policy_can_be_disabled() {
        let mut props = normalize("CustomersLogos", &json!({"logos": ["acme.png"]}));
        let options = DispatchOptions {
            replace_relative_images: false,
            ..DispatchOptions::default()
        };
        apply_image_policy(&mut props, &options);
        assert_eq!(props.to_value()["logos"][0]["src"], "acme.png");
    }

    #[test]
    fn test_other_kinds_are_untouched() {
        let mut props = normalize("Gallery", &json!({"images": ["/a.jpg"]}));
        apply_image_policy(&mut props, &DispatchOptions::default());
        assert_eq!(props.to_value()["images"][0]["src"], "/a.jpg");
    }
}
