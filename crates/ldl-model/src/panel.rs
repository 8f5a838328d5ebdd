//! Lipid panel values and their field metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit shared by every panel value and by the estimate.
pub const UNIT: &str = "mg/dL";

/// Round to one decimal place, half away from zero.
///
/// A result that rounds to zero is always `+0.0`.
pub fn round1(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// One of the three inputs of a lipid panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelField {
    /// Total cholesterol.
    TotalCholesterol,
    /// High-density lipoprotein cholesterol.
    Hdl,
    /// Triglycerides.
    Triglycerides,
}

impl PanelField {
    /// All fields in form order.
    pub const ALL: [PanelField; 3] = [
        PanelField::TotalCholesterol,
        PanelField::Hdl,
        PanelField::Triglycerides,
    ];

    /// Short clinical abbreviation.
    pub const fn short_label(&self) -> &'static str {
        match self {
            Self::TotalCholesterol => "TC",
            Self::Hdl => "HDL-C",
            Self::Triglycerides => "TG",
        }
    }

    /// Label used for the input rows of the report and the form.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TotalCholesterol => "TC (Total Cholesterol)",
            Self::Hdl => "HDL-C (Good Cholesterol)",
            Self::Triglycerides => "TG (Triglycerides)",
        }
    }

    /// Key used in the remote prediction request body.
    pub const fn json_key(&self) -> &'static str {
        match self {
            Self::TotalCholesterol => "TC",
            Self::Hdl => "HDL_C",
            Self::Triglycerides => "TG",
        }
    }

    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::TotalCholesterol => "e.g., 200.5",
            Self::Hdl => "e.g., 50.3",
            Self::Triglycerides => "e.g., 150.7",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::TotalCholesterol => "Total amount of cholesterol in your blood",
            Self::Hdl => "High-density lipoprotein, helps remove cholesterol",
            Self::Triglycerides => "Type of fat found in your blood",
        }
    }

    /// Message shown next to the field when its value is rejected.
    pub fn invalid_message(&self) -> String {
        format!("Please enter a valid {} value", self.short_label())
    }
}

impl fmt::Display for PanelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_label())
    }
}

/// Validated TC, HDL-C and TG values in mg/dL.
///
/// Every value is finite and strictly positive. Values outside that range
/// only enter through [`LipidPanel::new_unchecked`], which is meant for
/// callers that validated the numbers themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LipidPanel {
    total_cholesterol: f64,
    hdl: f64,
    triglycerides: f64,
}

impl LipidPanel {
    /// Build a panel, returning `None` when any value is non-finite or not positive.
    pub fn new(total_cholesterol: f64, hdl: f64, triglycerides: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(total_cholesterol) && valid(hdl) && valid(triglycerides) {
            Some(Self::new_unchecked(total_cholesterol, hdl, triglycerides))
        } else {
            None
        }
    }

    pub const fn new_unchecked(total_cholesterol: f64, hdl: f64, triglycerides: f64) -> Self {
        Self {
            total_cholesterol,
            hdl,
            triglycerides,
        }
    }

    pub const fn total_cholesterol(&self) -> f64 {
        self.total_cholesterol
    }

    pub const fn hdl(&self) -> f64 {
        self.hdl
    }

    pub const fn triglycerides(&self) -> f64 {
        self.triglycerides
    }

    /// Value of a single field.
    pub const fn get(&self, field: PanelField) -> f64 {
        match field {
            PanelField::TotalCholesterol => self.total_cholesterol,
            PanelField::Hdl => self.hdl,
            PanelField::Triglycerides => self.triglycerides,
        }
    }

    /// True when every value is finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        PanelField::ALL
            .iter()
            .all(|field| self.get(*field).is_finite() && self.get(*field) > 0.0)
    }
}
