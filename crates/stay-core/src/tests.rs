#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::config::{EncounterConfig, HostConfig};
    use crate::enums::*;
    use crate::errors::ConfigError;
    use crate::events::EncounterEvent;
    use crate::types::*;

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(EncounterConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            EncounterConfig::from_json_str(r#"{ "personal_radius": 8.0, "seed": 7 }"#).unwrap();
        assert_eq!(config.personal_radius, 8.0);
        assert_eq!(config.seed, 7);
        assert_eq!(config.recoil_radius, crate::constants::RECOIL_RADIUS);
        assert!(config.polling_enabled);
    }

    #[test]
    fn test_zero_radius_rejected() {
        let config = EncounterConfig {
            recoil_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "recoil_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_and_nan_geometry_rejected() {
        let negative = EncounterConfig {
            personal_radius: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let nan = EncounterConfig {
            cover_size: f32::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_cover_must_be_below_recoil() {
        let config = EncounterConfig {
            cover_size: 3.0,
            recoil_radius: 3.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZoneOrder { .. })));
    }

    #[test]
    fn test_empty_shrink_range_rejected() {
        let config = EncounterConfig {
            shrink_rate_min: 0.5,
            shrink_rate_max: 0.1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyRange {
                name: "shrink_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_stop_threshold_above_win_rejected() {
        let config = EncounterConfig {
            cover_stop_threshold: 4.0,
            cover_win_threshold: 3.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CoverThresholds { .. })
        ));
    }

    #[test]
    fn test_narrow_screen_rejected() {
        let config = EncounterConfig {
            screen_min_x: 0.0,
            screen_max_x: 1.0,
            screen_edge_margin: 0.25,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ScreenBounds { .. })
        ));
    }

    #[test]
    fn test_bad_json_reports_error() {
        let err = EncounterConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_host_config_nested_sections() {
        let config = HostConfig::from_json_str(
            r#"{ "encounter": { "cover_win_threshold": 5.0 }, "session": { "win_scene": "Ending" } }"#,
        )
        .unwrap();
        assert_eq!(config.encounter.cover_win_threshold, 5.0);
        assert_eq!(config.session.win_scene, "Ending");
        assert_eq!(config.player.speed, crate::constants::PLAYER_SPEED);
    }

    // ---- Geometry ----

    #[test]
    fn test_circle_overlap_is_strict() {
        assert!(circle_overlaps_circle(Vec2::ZERO, 1.0, Vec2::new(1.4, 0.0), 0.5));
        assert!(!circle_overlaps_circle(Vec2::ZERO, 1.0, Vec2::new(1.5, 0.0), 0.5));
    }

    #[test]
    fn test_box_overlap_corner_and_inside() {
        let size = Vec2::splat(1.0);
        // Circle centered inside the box.
        assert!(box_overlaps_circle(Vec2::ZERO, size, Vec2::new(0.1, 0.1), 0.2));
        // Near the corner but outside the radius.
        assert!(!box_overlaps_circle(Vec2::ZERO, size, Vec2::new(1.0, 1.0), 0.5));
        // Touching the right face.
        assert!(box_overlaps_circle(Vec2::ZERO, size, Vec2::new(0.9, 0.0), 0.5));
    }

    #[test]
    fn test_shape_resize_clamps_negative() {
        let shape = ZoneShape::Circle { radius: 2.0 };
        assert_eq!(shape.with_size(-1.0).size(), 0.0);
        let cover = ZoneShape::Box { side: 1.0 };
        assert_eq!(cover.with_size(0.5), ZoneShape::Box { side: 0.5 });
    }

    #[test]
    fn test_collider_left_bound() {
        let bounds = ColliderBounds::new(Vec2::new(3.0, 1.0), 0.5);
        assert_eq!(bounds.left_bound(), 2.5);
    }

    #[test]
    fn test_screen_clamp_respects_margin_and_width() {
        let screen = ScreenBounds {
            min_x: -9.0,
            max_x: 9.0,
            margin: 0.25,
        };
        assert_eq!(screen.clamp_center(-20.0, 0.5), -8.25);
        assert_eq!(screen.clamp_center(20.0, 0.5), 8.25);
        assert_eq!(screen.clamp_center(1.0, 0.5), 1.0);
    }

    // ---- Enums and events ----

    #[test]
    fn test_zone_table_indices_match_order() {
        for (i, kind) in ZoneKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert!(ZoneKind::Personal.receives_events());
        assert!(ZoneKind::Recoil.receives_events());
        assert!(!ZoneKind::Cover.receives_events());
        assert!(!ZoneKind::Movement.receives_events());
    }

    #[test]
    fn test_event_json_is_tagged() {
        let event = EncounterEvent::Loss {
            reason: "recoil".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"Loss","reason":"recoil"}"#);
        assert_eq!(event.outcome(), Some(Outcome::Loss));
        assert_eq!(EncounterEvent::RecoilTriggered.outcome(), None);
    }
}
