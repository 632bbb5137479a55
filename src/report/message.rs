//! Workout report record and its text renderings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language of the report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Russian labels, the tracker's native output
    #[default]
    Ru,
    /// English labels
    En,
}

/// Output encoding for report lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One human-readable sentence per workout
    #[default]
    Text,
    /// One JSON object per workout
    Json,
}

/// Report errors.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Serialize error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Summary of one finished workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    training_type: String,
    /// Hours
    duration: f64,
    /// Kilometers
    distance: f64,
    /// km/h
    speed: f64,
    /// kcal
    calories: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    pub fn training_type(&self) -> &str {
        &self.training_type
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    /// Report sentence in the default locale.
    pub fn get_message(&self) -> String {
        self.render(Locale::default())
    }

    /// Report sentence in the given locale. All numbers carry three decimals.
    pub fn render(&self, locale: Locale) -> String {
        match locale {
            Locale::Ru => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
                 Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
            Locale::En => format!(
                "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
                 Mean speed: {:.3} km/h; Calories burned: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
        }
    }

    /// Encode as a single-line JSON object.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render one report line in the requested format.
    pub fn format(&self, format: ReportFormat, locale: Locale) -> Result<String, ReportError> {
        match format {
            ReportFormat::Text => Ok(self.render(locale)),
            ReportFormat::Json => self.to_json(),
        }
    }
}

impl std::fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_message())
    }
}
