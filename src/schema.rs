//! Fixed-width column layouts for the supported index file formats.
//!
//! Every provider file is a sequence of whitespace-padded numeric columns
//! without delimiters. A [`Layout`] describes how to slice one line: the
//! ordered field names, their character widths and numeric kinds, and the
//! optional scale factor applied after decoding (Kp stored in tenths).

/// Numeric kind of a raw field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
}

/// One fixed-width field of a layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub width: usize,
    pub kind: FieldKind,
    /// Factor converting the raw value to physical units
    pub scale: Option<f64>,
}

impl FieldSpec {
    const fn int(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            kind: FieldKind::Int,
            scale: None,
        }
    }

    const fn float(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            kind: FieldKind::Float,
            scale: None,
        }
    }

    /// Integer field holding tenths of a unit
    const fn tenths(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            kind: FieldKind::Int,
            scale: Some(0.1),
        }
    }
}

/// How a record's timestamp is assembled from its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeKey {
    /// Four-digit year, month, day
    YearMonthDay,
    /// Two-digit year with century pivot, month, day
    WdcYearMonthDay,
    /// Year, day of year, hour of day
    YearDoyHour,
    /// Year, month, day and a fractional hour of day (`hh.h`)
    YearMonthDayFractionalHour,
}

/// Identifier of a registered layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Celestrak,
    Gfz,
    Wdc,
    Hp,
    Omni,
}

/// Immutable description of a fixed-width file format
#[derive(Debug, PartialEq)]
pub struct Layout {
    pub kind: LayoutKind,
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
    /// Lines skipped unconditionally at the top of the file
    pub header_lines: usize,
    pub time_key: TimeKey,
    /// Text past the last field is ignored instead of rejected
    pub ignore_trailing: bool,
    /// Lines shorter than the full width are accepted, missing fields are null
    pub short_lines_allowed: bool,
}

impl Layout {
    /// Registered layout for the given kind
    pub fn for_kind(kind: LayoutKind) -> &'static Layout {
        match kind {
            LayoutKind::Celestrak => &CELESTRAK_LAYOUT,
            LayoutKind::Gfz => &GFZ_LAYOUT,
            LayoutKind::Wdc => &WDC_LAYOUT,
            LayoutKind::Hp => &HP_LAYOUT,
            LayoutKind::Omni => &OMNI_LAYOUT,
        }
    }

    /// Total line width in characters
    pub fn line_width(&self) -> usize {
        self.fields.iter().map(|f| f.width).sum()
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Character range `[start, end)` of every field, in layout order
    pub fn spans(&self) -> Vec<(usize, usize)> {
        let mut start = 0;
        self.fields
            .iter()
            .map(|f| {
                let span = (start, start + f.width);
                start += f.width;
                span
            })
            .collect()
    }
}

// Celestrak SW-All / SW-Last5Years, legacy format
const CELESTRAK_FIELDS: [FieldSpec; 33] = [
    FieldSpec::int("year", 4),
    FieldSpec::int("month", 3),
    FieldSpec::int("day", 3),
    FieldSpec::int("bsrn", 5),
    FieldSpec::int("rotd", 3),
    FieldSpec::tenths("Kp0", 3),
    FieldSpec::tenths("Kp3", 3),
    FieldSpec::tenths("Kp6", 3),
    FieldSpec::tenths("Kp9", 3),
    FieldSpec::tenths("Kp12", 3),
    FieldSpec::tenths("Kp15", 3),
    FieldSpec::tenths("Kp18", 3),
    FieldSpec::tenths("Kp21", 3),
    FieldSpec::tenths("Kpsum", 4),
    FieldSpec::int("Ap0", 4),
    FieldSpec::int("Ap3", 4),
    FieldSpec::int("Ap6", 4),
    FieldSpec::int("Ap9", 4),
    FieldSpec::int("Ap12", 4),
    FieldSpec::int("Ap15", 4),
    FieldSpec::int("Ap18", 4),
    FieldSpec::int("Ap21", 4),
    FieldSpec::int("Apavg", 4),
    FieldSpec::float("Cp", 4),
    FieldSpec::int("C9", 2),
    FieldSpec::int("isn", 4),
    FieldSpec::float("f107_adj", 6),
    FieldSpec::int("Q", 2),
    FieldSpec::float("f107_81ctr_adj", 6),
    FieldSpec::float("f107_81lst_adj", 6),
    FieldSpec::float("f107_obs", 6),
    FieldSpec::float("f107_81ctr_obs", 6),
    FieldSpec::float("f107_81lst_obs", 6),
];

// GFZ Kp_ap_Ap_SN_F107 daily files
const GFZ_FIELDS: [FieldSpec; 28] = [
    FieldSpec::int("year", 4),
    FieldSpec::int("month", 3),
    FieldSpec::int("day", 3),
    FieldSpec::int("days", 6),
    FieldSpec::float("days_m", 8),
    FieldSpec::int("bsrn", 5),
    FieldSpec::int("rotd", 3),
    FieldSpec::float("Kp0", 7),
    FieldSpec::float("Kp3", 7),
    FieldSpec::float("Kp6", 7),
    FieldSpec::float("Kp9", 7),
    FieldSpec::float("Kp12", 7),
    FieldSpec::float("Kp15", 7),
    FieldSpec::float("Kp18", 7),
    FieldSpec::float("Kp21", 7),
    FieldSpec::int("Ap0", 5),
    FieldSpec::int("Ap3", 5),
    FieldSpec::int("Ap6", 5),
    FieldSpec::int("Ap9", 5),
    FieldSpec::int("Ap12", 5),
    FieldSpec::int("Ap15", 5),
    FieldSpec::int("Ap18", 5),
    FieldSpec::int("Ap21", 5),
    FieldSpec::int("Apavg", 6),
    FieldSpec::int("isn", 4),
    FieldSpec::float("f107_obs", 9),
    FieldSpec::float("f107_adj", 9),
    FieldSpec::int("D", 2),
];

// WDC exchange format, two-digit years
const WDC_FIELDS: [FieldSpec; 25] = [
    FieldSpec::int("year", 2),
    FieldSpec::int("month", 2),
    FieldSpec::int("day", 2),
    FieldSpec::int("bsrn", 4),
    FieldSpec::int("rotd", 2),
    FieldSpec::tenths("Kp0", 2),
    FieldSpec::tenths("Kp3", 2),
    FieldSpec::tenths("Kp6", 2),
    FieldSpec::tenths("Kp9", 2),
    FieldSpec::tenths("Kp12", 2),
    FieldSpec::tenths("Kp15", 2),
    FieldSpec::tenths("Kp18", 2),
    FieldSpec::tenths("Kp21", 2),
    FieldSpec::tenths("Kpsum", 3),
    FieldSpec::int("Ap0", 3),
    FieldSpec::int("Ap3", 3),
    FieldSpec::int("Ap6", 3),
    FieldSpec::int("Ap9", 3),
    FieldSpec::int("Ap12", 3),
    FieldSpec::int("Ap15", 3),
    FieldSpec::int("Ap18", 3),
    FieldSpec::int("Ap21", 3),
    FieldSpec::int("Apavg", 3),
    FieldSpec::float("Cp", 3),
    FieldSpec::int("C9", 1),
];

// GFZ Hp30/Hp60 series; index columns are renamed per product
const HP_FIELDS: [FieldSpec; 10] = [
    FieldSpec::int("year", 4),
    FieldSpec::int("month", 3),
    FieldSpec::int("day", 3),
    FieldSpec::float("hh_h", 5),
    FieldSpec::float("hh_m", 6),
    FieldSpec::float("days", 12),
    FieldSpec::float("days_m", 12),
    FieldSpec::float("Hp", 7),
    FieldSpec::int("ap", 5),
    FieldSpec::int("D", 2),
];

// OMNI2 extended hourly files:
// 2I4,I3,I5,2I3,2I4,14F6.1,F9.0,F6.1,F6.0,2F6.1,F6.3,F6.2,
// F9.0,F6.1,F6.0,2F6.1,F6.3,2F7.2,F6.1,I3,I4,I6,I5,F10.2,
// 5F9.2,I3,I4,2F6.1,2I6,F5.1,F9.6,F7.4
const OMNI_FIELDS: [FieldSpec; 57] = [
    FieldSpec::int("year", 4),
    FieldSpec::int("doy", 4),
    FieldSpec::int("hour", 3),
    FieldSpec::int("bsrn", 5),
    FieldSpec::int("id_imf", 3),
    FieldSpec::int("id_sw", 3),
    FieldSpec::int("n_imf", 4),
    FieldSpec::int("n_plasma", 4),
    FieldSpec::float("B_mag_avg", 6),
    FieldSpec::float("B_mag", 6),
    FieldSpec::float("theta_B", 6),
    FieldSpec::float("phi_B", 6),
    FieldSpec::float("B_x", 6),
    FieldSpec::float("B_y_GSE", 6),
    FieldSpec::float("B_z_GSE", 6),
    FieldSpec::float("B_y_GSM", 6),
    FieldSpec::float("B_z_GSM", 6),
    FieldSpec::float("sigma_B_mag_avg", 6),
    FieldSpec::float("sigma_B_mag", 6),
    FieldSpec::float("sigma_B_x_GSE", 6),
    FieldSpec::float("sigma_B_y_GSE", 6),
    FieldSpec::float("sigma_B_z_GSE", 6),
    FieldSpec::float("T_p", 9),
    FieldSpec::float("n_p", 6),
    FieldSpec::float("v_plasma", 6),
    FieldSpec::float("phi_v", 6),
    FieldSpec::float("theta_v", 6),
    FieldSpec::float("n_alpha_n_p", 6),
    FieldSpec::float("p_flow", 6),
    FieldSpec::float("sigma_T", 9),
    FieldSpec::float("sigma_n", 6),
    FieldSpec::float("sigma_v", 6),
    FieldSpec::float("sigma_phi_v", 6),
    FieldSpec::float("sigma_theta_v", 6),
    FieldSpec::float("sigma_na_np", 6),
    FieldSpec::float("E", 7),
    FieldSpec::float("beta_plasma", 7),
    FieldSpec::float("mach", 6),
    FieldSpec::tenths("Kp", 3),
    FieldSpec::int("R", 4),
    FieldSpec::int("Dst", 6),
    FieldSpec::int("AE", 5),
    FieldSpec::float("p_01MeV", 10),
    FieldSpec::float("p_02MeV", 9),
    FieldSpec::float("p_04MeV", 9),
    FieldSpec::float("p_10MeV", 9),
    FieldSpec::float("p_30MeV", 9),
    FieldSpec::float("p_60MeV", 9),
    FieldSpec::int("flag", 3),
    FieldSpec::int("Ap", 4),
    FieldSpec::float("f107_adj", 6),
    FieldSpec::float("PC", 6),
    FieldSpec::int("AL", 6),
    FieldSpec::int("AU", 6),
    FieldSpec::float("mach_mag", 5),
    FieldSpec::float("Lya", 9),
    FieldSpec::float("QI_p", 7),
];

static CELESTRAK_LAYOUT: Layout = Layout {
    kind: LayoutKind::Celestrak,
    name: "celestrak",
    fields: &CELESTRAK_FIELDS,
    header_lines: 3,
    time_key: TimeKey::YearMonthDay,
    ignore_trailing: false,
    short_lines_allowed: true,
};

static GFZ_LAYOUT: Layout = Layout {
    kind: LayoutKind::Gfz,
    name: "gfz",
    fields: &GFZ_FIELDS,
    header_lines: 3,
    time_key: TimeKey::YearMonthDay,
    ignore_trailing: false,
    short_lines_allowed: false,
};

static WDC_LAYOUT: Layout = Layout {
    kind: LayoutKind::Wdc,
    name: "wdc",
    fields: &WDC_FIELDS,
    header_lines: 3,
    time_key: TimeKey::WdcYearMonthDay,
    ignore_trailing: true,
    short_lines_allowed: false,
};

static HP_LAYOUT: Layout = Layout {
    kind: LayoutKind::Hp,
    name: "hp",
    fields: &HP_FIELDS,
    header_lines: 0,
    time_key: TimeKey::YearMonthDayFractionalHour,
    ignore_trailing: false,
    short_lines_allowed: false,
};

static OMNI_LAYOUT: Layout = Layout {
    kind: LayoutKind::Omni,
    name: "omni2",
    fields: &OMNI_FIELDS,
    header_lines: 0,
    time_key: TimeKey::YearDoyHour,
    ignore_trailing: false,
    short_lines_allowed: false,
};
