//! Widget configuration and per-variant literal strings.

use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::error::ConfigError;
use crate::geometry::LabelLayout;

/// The two shipped flavors of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Labels rotated around the wheel center, silent refocus on empty input.
    #[default]
    Classic,
    /// Labels at sine/cosine coordinates, alert on empty input.
    Polar,
}

impl Variant {
    pub fn label_layout(self) -> LabelLayout {
        match self {
            Variant::Classic => LabelLayout::Rotated,
            Variant::Polar => LabelLayout::Polar,
        }
    }

    /// Whether an empty add input raises an alert instead of refocusing.
    pub fn alerts_on_empty_input(self) -> bool {
        matches!(self, Variant::Polar)
    }
}

/// UI strings. Each variant carries its own literal copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub title: String,
    pub spin: String,
    pub spinning: String,
    pub reset: String,
    pub input_placeholder: String,
    pub add: String,
    pub edit: String,
    pub save: String,
    pub delete: String,
    pub empty_input: String,
    pub too_few_items: String,
    pub result_prefix: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self::classic()
    }
}

impl Messages {
    /// English strings. The button keeps its START label while disabled and
    /// the result shows the bare item.
    pub fn classic() -> Self {
        Self {
            title: "Spin the Wheel".to_string(),
            spin: "START".to_string(),
            spinning: "START".to_string(),
            reset: "RESET".to_string(),
            input_placeholder: "Enter a new item".to_string(),
            add: "Add".to_string(),
            edit: "Edit".to_string(),
            save: "Save".to_string(),
            delete: "Delete".to_string(),
            empty_input: "Please enter an item.".to_string(),
            too_few_items: "At least 2 items are required!".to_string(),
            result_prefix: String::new(),
        }
    }

    pub fn polar() -> Self {
        Self {
            title: "돌림판".to_string(),
            spin: "돌리기".to_string(),
            spinning: "돌리는 중...".to_string(),
            reset: "다시 하기".to_string(),
            input_placeholder: "새 항목을 입력하세요".to_string(),
            add: "추가".to_string(),
            edit: "수정".to_string(),
            save: "저장".to_string(),
            delete: "삭제".to_string(),
            empty_input: "항목을 입력해 주세요.".to_string(),
            too_few_items: "최소 2개의 항목이 필요합니다.".to_string(),
            result_prefix: "결과: ".to_string(),
        }
    }
}

/// Configuration for one wheel instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub variant: Variant,
    /// Length of the spin transition and the delay before the result shows.
    pub spin_duration_ms: u32,
    /// Full turns added on top of the stop angle.
    pub extra_rotations: u32,
    /// How far from the slice middle the wheel may stop, as a fraction of half a slice.
    pub stop_jitter: f64,
    /// Polar label distance from the center, as a fraction of the wheel radius.
    pub label_radius: f64,
    pub initial_items: Vec<String>,
    pub palette: Palette,
    pub messages: Messages,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self::for_variant(Variant::Classic)
    }
}

impl WheelConfig {
    pub const DEFAULT_SPIN_DURATION_MS: u32 = 4000;
    pub const DEFAULT_EXTRA_ROTATIONS: u32 = 5;
    pub const MAX_STOP_JITTER: f64 = 0.95;

    pub fn for_variant(variant: Variant) -> Self {
        let (initial_items, messages, stop_jitter) = match variant {
            Variant::Classic => (vec!["Lunch", "Dinner", "Snack"], Messages::classic(), 0.0),
            Variant::Polar => (vec!["피자", "치킨", "초밥", "떡볶이"], Messages::polar(), 0.6),
        };
        Self {
            variant,
            spin_duration_ms: Self::DEFAULT_SPIN_DURATION_MS,
            extra_rotations: Self::DEFAULT_EXTRA_ROTATIONS,
            stop_jitter,
            label_radius: 0.65,
            initial_items: initial_items.into_iter().map(str::to_string).collect(),
            palette: Palette::default(),
            messages,
        }
    }

    /// Parses JSON overrides on top of the variant defaults.
    ///
    /// Fields missing from `json` fall back to [`WheelConfig::for_variant`].
    /// The variant always stays `variant`; it is chosen by the route.
    pub fn from_json(variant: Variant, json: &str) -> Result<Self, ConfigError> {
        let mut value = serde_json::to_value(Self::for_variant(variant))?;
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        merge(&mut value, overrides);
        let mut config: Self = serde_json::from_value(value)?;
        config.variant = variant;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spin_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        check_range("stop_jitter", self.stop_jitter, 0.0, Self::MAX_STOP_JITTER)?;
        check_range("label_radius", self.label_radius, 0.0, 1.0)?;
        Ok(())
    }
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

/// Recursively overlays `patch` objects onto `base`; other values replace.
fn merge(base: &mut serde_json::Value, patch: serde_json::Value) {
    match (base, patch) {
        (serde_json::Value::Object(base), serde_json::Value::Object(patch)) => {
            for (key, value) in patch {
                merge(base.entry(key).or_insert(serde_json::Value::Null), value);
            }
        }
        (base, patch) => *base = patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_defaults() {
        let classic = WheelConfig::for_variant(Variant::Classic);
        let polar = WheelConfig::for_variant(Variant::Polar);

        assert_eq!(classic.spin_duration_ms, 4000);
        assert_eq!(classic.variant.label_layout(), LabelLayout::Rotated);
        assert_eq!(polar.variant.label_layout(), LabelLayout::Polar);
        assert!(!classic.variant.alerts_on_empty_input());
        assert!(polar.variant.alerts_on_empty_input());
        assert_eq!(polar.messages, Messages::polar());
        assert!(classic.validate().is_ok());
        assert!(polar.validate().is_ok());
    }

    #[test]
    fn test_classic_defaults() {
        let classic = WheelConfig::for_variant(Variant::Classic);

        assert_eq!(classic.initial_items, vec!["Lunch", "Dinner", "Snack"]);
        assert_eq!(classic.palette, Palette::default());
        assert_eq!(classic.messages.spin, "START");
        assert_eq!(classic.messages.reset, "RESET");
        assert_eq!(classic.messages.too_few_items, "At least 2 items are required!");
        assert_eq!(classic.messages.result_prefix, "");
        assert_eq!(classic.extra_rotations, 5);
        assert_eq!(classic.stop_jitter, 0.0);
        assert_eq!(WheelConfig::default(), classic);
    }

    #[test]
    fn test_from_json_keeps_route_variant() {
        let config = WheelConfig::from_json(Variant::Classic, r#"{"variant": "polar"}"#).unwrap();
        assert_eq!(config.variant, Variant::Classic);
        assert_eq!(config.variant.label_layout(), LabelLayout::Rotated);

        let config = WheelConfig::from_json(Variant::Polar, r#"{"variant": "classic"}"#).unwrap();
        assert_eq!(config.variant, Variant::Polar);
    }

    #[test]
    fn test_validate_rejects_bad_label_radius() {
        let mut config = WheelConfig::for_variant(Variant::Polar);

        config.label_radius = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { name: "label_radius", .. })
        ));

        config.label_radius = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { name: "label_radius", .. })
        ));

        assert!(matches!(
            WheelConfig::from_json(Variant::Polar, r#"{"label_radius": -0.1}"#),
            Err(ConfigError::OutOfRange { name: "label_radius", .. })
        ));
    }

    #[test]
    fn test_from_json_overrides_keep_defaults() {
        let config = WheelConfig::from_json(
            Variant::Classic,
            r#"{"spin_duration_ms": 2500, "messages": {"spin": "Go!"}, "initial_items": ["A", "B"]}"#,
        )
        .unwrap();

        assert_eq!(config.spin_duration_ms, 2500);
        assert_eq!(config.messages.spin, "Go!");
        assert_eq!(config.messages.reset, "RESET");
        assert_eq!(config.initial_items, vec!["A", "B"]);
        assert_eq!(config.extra_rotations, WheelConfig::DEFAULT_EXTRA_ROTATIONS);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            WheelConfig::from_json(Variant::Polar, r#"{"spin_duration_ms": 0}"#),
            Err(ConfigError::ZeroDuration)
        ));
        assert!(matches!(
            WheelConfig::from_json(Variant::Polar, r#"{"palette": []}"#),
            Err(ConfigError::EmptyPalette)
        ));
        assert!(matches!(
            WheelConfig::from_json(Variant::Polar, r#"{"stop_jitter": 1.5}"#),
            Err(ConfigError::OutOfRange { name: "stop_jitter", .. })
        ));
        assert!(matches!(
            WheelConfig::from_json(Variant::Polar, "not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
