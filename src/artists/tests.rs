#[cfg(test)]
mod tests {
    use super::super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn image(id: u32, title: &str, style: TattooStyle, tags: &[&str]) -> PortfolioImage {
        PortfolioImage {
            id,
            filename: format!("{}.jpg", title.to_lowercase().replace(' ', "-")),
            title: title.to_string(),
            style,
            placement: "Forearm".to_string(),
            session_time: "3 hours".to_string(),
            description: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            before_image: None,
            is_healed: Some(true),
        }
    }

    fn micah() -> Artist {
        Artist {
            slug: "micah".to_string(),
            name: "Micah".to_string(),
            specialty: "Traditional & Black & Grey".to_string(),
            experience: "8+ years".to_string(),
            description: "Bold traditional designs".to_string(),
            extended_bio: None,
            philosophy: None,
            rating: None,
            social_media: None,
            position: Some(2),
            portfolio: vec![
                image(1, "Traditional Eagle", TattooStyle::Traditional, &["eagle", "bold"]),
                image(2, "Eagle In Flight", TattooStyle::Traditional, &["eagle", "classic"]),
                image(3, "Traditional Rose", TattooStyle::Traditional, &["rose", "classic"]),
                image(4, "Grey Portrait", TattooStyle::BlackAndGrey, &["portrait"]),
            ],
        }
    }

    #[test]
    fn test_valid_image_passes() {
        let record = json!({
            "id": 1,
            "filename": "norse-raven.jpg",
            "title": "Norse Raven",
            "style": "Norse",
            "placement": "Shoulder",
            "session_time": "6 hours",
            "tags": ["norse", "raven"],
            "is_healed": true
        });

        let report = validate_portfolio_image(&record);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_empty_image_enumerates_every_required_field() {
        let report = validate_portfolio_image(&json!({}));
        assert!(!report.is_valid);
        // id, filename, title, style, placement, session_time
        assert_eq!(report.errors.len(), 6);
    }

    #[test]
    fn test_type_violations_are_all_collected() {
        let record = json!({
            "id": "one",
            "filename": "a.jpg",
            "title": "A",
            "style": "Norse",
            "placement": "Back",
            "session_time": "2 hours",
            "description": 42,
            "tags": "norse",
            "before_image": false,
            "is_healed": "yes"
        });

        let report = validate_portfolio_image(&record);
        assert!(!report.is_valid);
        let expected = [
            "Image ID is required and must be a positive number",
            "Description must be a string",
            "Tags must be an array of strings",
            "Before image must be a string",
            "is_healed must be a boolean",
        ];
        assert_eq!(report.errors.len(), expected.len());
        for message in expected {
            assert!(
                report.errors.iter().any(|e| e == message),
                "missing error: {message}"
            );
        }
    }

    #[test]
    fn test_style_outside_closed_set_rejected() {
        let record = json!({
            "id": 1,
            "filename": "a.jpg",
            "title": "A",
            "style": "Tribal",
            "placement": "Back",
            "session_time": "2 hours"
        });

        let report = validate_portfolio_image(&record);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Style must be one of:"));
    }

    #[test]
    fn test_artist_errors_flatten_per_image_counts() {
        let record = json!({
            "slug": "pagan",
            "name": "Pagan",
            // specialty missing, experience missing
            "description": "Norse blackwork",
            "portfolio": [
                { "id": 1, "filename": "ok.jpg", "title": "Ok", "style": "Norse",
                  "placement": "Back", "session_time": "4 hours" },
                // second image: 2 violations
                { "id": 2, "filename": "bad.jpg", "title": "Bad", "style": "Tribal",
                  "placement": "Arm", "session_time": "2 hours", "is_healed": "no" }
            ]
        });

        let report = validate_artist(&record);
        assert!(!report.is_valid);
        // 2 own-field errors + 2 flattened image errors, no double counting
        assert_eq!(report.errors.len(), 4);
        assert!(
            report
                .errors
                .iter()
                .filter(|e| e.starts_with("Portfolio image 2:"))
                .count()
                == 2
        );
    }

    #[test]
    fn test_typed_decode_of_valid_record() {
        let record = json!({
            "slug": "kason",
            "name": "Kason",
            "specialty": "Fineline & Minimalist",
            "experience": "5+ years",
            "description": "Mystical and minimal fineline tattoos",
            "portfolio": [
                { "id": 1, "filename": "fineline.jpg", "title": "Delicate Fineline",
                  "style": "Fineline", "placement": "Wrist", "session_time": "2 hours",
                  "tags": ["fineline", "minimal"] }
            ]
        });

        assert!(validate_artist(&record).is_valid);
        let artist: Artist = serde_json::from_value(record).unwrap();
        assert_eq!(artist.portfolio[0].style, TattooStyle::Fineline);
        assert_eq!(artist.portfolio[0].is_healed, None);
    }

    #[test]
    fn test_lookups_return_none_for_missing() {
        let repo = ArtistRepository::from_artists(vec![micah()]);
        assert!(repo.artist_by_slug("nobody").is_none());
        assert!(repo.portfolio("nobody").is_none());
        assert!(repo.image("micah", 99).is_none());
        assert!(repo.filter_by_style("nobody", TattooStyle::Norse).is_empty());
        assert!(repo.filter_by_tags("nobody", &["eagle"]).is_empty());
    }

    #[test]
    fn test_style_filters_partition_the_portfolio() {
        let repo = ArtistRepository::from_artists(vec![micah()]);
        let portfolio = repo.portfolio("micah").unwrap();

        let mut seen = HashSet::new();
        let mut total = 0;
        for style in repo.all_styles() {
            for image in repo.filter_by_style("micah", style) {
                assert!(seen.insert(image.id), "image {} counted twice", image.id);
                total += 1;
            }
        }
        assert_eq!(total, portfolio.len());
    }

    #[test]
    fn test_tag_filter_is_monotonic_in_the_tag_set() {
        let repo = ArtistRepository::from_artists(vec![micah()]);

        let eagle = repo.filter_by_tags("micah", &["eagle"]);
        let eagle_rose = repo.filter_by_tags("micah", &["eagle", "rose"]);

        assert_eq!(eagle.len(), 2);
        assert_eq!(eagle_rose.len(), 3);
        for image in &eagle {
            assert!(eagle_rose.iter().any(|i| i.id == image.id));
        }
    }

    #[test]
    fn test_all_styles_and_tags_are_sorted() {
        let repo = ArtistRepository::from_artists(vec![micah()]);

        let styles: Vec<&str> = repo.all_styles().iter().map(|s| s.as_str()).collect();
        assert_eq!(styles, vec!["Black & Grey", "Traditional"]);

        let tags = repo.all_tags();
        let mut sorted = tags.clone();
        sorted.sort();
        assert_eq!(tags, sorted);
    }

    #[test]
    fn test_listing_order_respects_position() {
        let mut first = micah();
        first.slug = "pagan".to_string();
        first.position = Some(1);
        let repo = ArtistRepository::from_artists(vec![micah(), first]);
        assert_eq!(repo.slugs(), ["pagan", "micah"]);
    }
}
