//! Missing-value masking for OMNI2 tables
//!
//! OMNI2 encodes missing measurements as field-specific fill values (all
//! nines, or zero for the flag). Masking replaces those values with nulls.

use super::normalize::raw_value;
use crate::error::Result;
use crate::schema::{Layout, LayoutKind};
use polars::prelude::*;
use tracing::debug;

/// Raw fill value of every maskable OMNI2 field
///
/// Values are compared before unit rescaling, so `Kp` (stored in tenths)
/// is listed as 99. `year`, `doy` and `hour` are never masked.
pub const OMNI_SENTINELS: &[(&str, f64)] = &[
    ("bsrn", 9999.0),
    ("id_imf", 99.0),
    ("id_sw", 99.0),
    ("n_imf", 999.0),
    ("n_plasma", 999.0),
    ("B_mag_avg", 999.9),
    ("B_mag", 999.9),
    ("theta_B", 999.9),
    ("phi_B", 999.9),
    ("B_x", 999.9),
    ("B_y_GSE", 999.9),
    ("B_z_GSE", 999.9),
    ("B_y_GSM", 999.9),
    ("B_z_GSM", 999.9),
    ("sigma_B_mag_avg", 999.9),
    ("sigma_B_mag", 999.9),
    ("sigma_B_x_GSE", 999.9),
    ("sigma_B_y_GSE", 999.9),
    ("sigma_B_z_GSE", 999.9),
    ("T_p", 9999999.0),
    ("n_p", 999.9),
    ("v_plasma", 9999.0),
    ("phi_v", 999.9),
    ("theta_v", 999.9),
    ("n_alpha_n_p", 9.999),
    ("p_flow", 99.99),
    ("sigma_T", 9999999.0),
    ("sigma_n", 999.9),
    ("sigma_v", 9999.0),
    ("sigma_phi_v", 999.9),
    ("sigma_theta_v", 999.9),
    ("sigma_na_np", 9.999),
    ("E", 999.99),
    ("beta_plasma", 999.99),
    ("mach", 999.9),
    ("Kp", 99.0),
    ("R", 999.0),
    ("Dst", 99999.0),
    ("AE", 9999.0),
    ("p_01MeV", 999999.99),
    ("p_02MeV", 99999.99),
    ("p_04MeV", 99999.99),
    ("p_10MeV", 99999.99),
    ("p_30MeV", 99999.99),
    ("p_60MeV", 99999.99),
    ("flag", 0.0),
    ("Ap", 999.0),
    ("f107_adj", 999.9),
    ("PC", 999.9),
    ("AL", 99999.0),
    ("AU", 99999.0),
    ("mach_mag", 99.9),
    ("Lya", 0.999999),
    ("QI_p", 9.9999),
];

/// Fill value of a field, `None` for fields that are never masked
pub fn sentinel(name: &str) -> Option<f64> {
    OMNI_SENTINELS
        .iter()
        .find(|(field, _)| *field == name)
        .map(|(_, value)| *value)
}

/// Copy of `frame` with every fill value replaced by null
///
/// A column that received at least one null becomes Float64, all other
/// columns keep their type. The input is left untouched.
pub fn mask_missing(frame: &DataFrame) -> Result<DataFrame> {
    let layout = Layout::for_kind(LayoutKind::Omni);
    let mut columns = Vec::with_capacity(frame.width());
    let mut masked_total = 0usize;

    for column in frame.get_columns() {
        let Some(fill) = sentinel(column.name().as_str()) else {
            columns.push(column.clone());
            continue;
        };
        let scale = layout.field(column.name().as_str()).and_then(|f| f.scale);

        let floats = column.cast(&DataType::Float64)?;
        let mut masked = 0usize;
        let values: Vec<Option<f64>> = floats
            .f64()?
            .into_iter()
            .map(|value| match value {
                Some(v) if raw_value(v, scale) == fill => {
                    masked += 1;
                    None
                }
                other => other,
            })
            .collect();

        if masked == 0 {
            columns.push(column.clone());
        } else {
            masked_total += masked;
            columns.push(Column::new(column.name().clone(), values));
        }
    }

    debug!("Masked {} fill values", masked_total);
    Ok(DataFrame::new(columns)?)
}
