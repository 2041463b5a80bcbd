//! The ordered field schema of the legacy design file's winding block.
//!
//! The block is field-major: one row per descriptor below, one token per
//! active winding column within the row. Two fields are a legacy quirk tied
//! to absolute file position and exist only in the first active column's row
//! ([`FieldScope::FirstColumnOnly`]); several rows are carried by every file
//! revision but ignored ([`FieldDesc::skip`]).

/// Which columns carry a token for a field's row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldScope {
    /// One token per active winding column.
    AllColumns,
    /// A single token, belonging to the first active column only.
    FirstColumnOnly,
}

/// One row of the winding field block.
#[derive(Debug, Clone, Copy)]
pub struct FieldDesc {
    pub name: &'static str,
    pub scope: FieldScope,
    /// Present in the file but never read into the model.
    pub skip: bool,
}

const fn field(name: &'static str) -> FieldDesc {
    FieldDesc {
        name,
        scope: FieldScope::AllColumns,
        skip: false,
    }
}

const fn first_only(name: &'static str) -> FieldDesc {
    FieldDesc {
        name,
        scope: FieldScope::FirstColumnOnly,
        skip: false,
    }
}

const fn legacy(name: &'static str) -> FieldDesc {
    FieldDesc {
        name,
        scope: FieldScope::AllColumns,
        skip: true,
    }
}

/// Authoritative field order of the winding block. Reordering entries here
/// changes the file format.
///
/// The `winding_type` code occupies the position older revisions used for a
/// standalone multistart flag; code 6 means multistart, so the type code
/// subsumes that flag.
pub const WINDING_FIELDS: &[FieldDesc] = &[
    field("terminal"),
    field("winding_type"),
    field("min_turns"),
    field("nom_turns"),
    field("max_turns"),
    field("elec_height"),
    field("spiral"),
    field("double_stack"),
    field("axial_sections"),
    field("spacer_thickness"),
    field("spacer_width"),
    field("axial_columns"),
    field("radial_sections"),
    field("radial_insulation"),
    field("duct_count"),
    field("duct_dim"),
    field("radial_supports"),
    legacy("winding_style_reserved"),
    field("cable_type"),
    field("cables_axial"),
    field("cables_radial"),
    field("strand_axial"),
    field("strand_radial"),
    field("strand_insulation"),
    field("cable_insulation"),
    field("internal_insulation"),
    field("ctc_strands"),
    legacy("transposition_reserved"),
    field("gap_center"),
    field("gap_bottom"),
    field("gap_top"),
    field("bottom_edge_pack"),
    field("coil_id"),
    field("overbuild"),
    field("ground_clearance"),
    first_only("sc_factor"),
    first_only("system_gva"),
    legacy("loss_reserved"),
    legacy("eddy_reserved"),
];

/// Number of winding columns a row-map line describes.
pub const NUM_WINDING_COLUMNS: usize = 9;

/// Row-map token marking an unused column.
pub const COLUMN_UNUSED: &str = "FALSE";
