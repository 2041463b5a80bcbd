//! End-to-end import of a well-formed legacy design file.

use cs_design::schema::{FieldScope, WINDING_FIELDS};
use cs_design::{DesignError, parse};

/// Emit the field block for `num_columns` active columns, honoring the
/// field-major layout: one row per schema field, one token per column
/// (except the two first-column-only rows).
fn field_block(num_columns: usize) -> String {
    let mut text = String::new();
    for desc in WINDING_FIELDS {
        let per_column = match desc.scope {
            FieldScope::AllColumns => num_columns,
            FieldScope::FirstColumnOnly => 1,
        };
        for col in 0..per_column {
            let value = match desc.name {
                "terminal" => "1",
                "winding_type" => "1",
                "min_turns" | "nom_turns" | "max_turns" => "100",
                "elec_height" => "2000.0",
                "axial_sections" => "4",
                "spacer_thickness" => "4.0",
                "spacer_width" => "40.0",
                "axial_columns" => "12",
                "radial_sections" => "2",
                "radial_insulation" => "0.5",
                "duct_count" => "1",
                "duct_dim" => "6.0",
                "radial_supports" => "8",
                "cable_type" => "1",
                "cables_axial" | "cables_radial" => "1",
                "strand_axial" => "10.0",
                "strand_radial" => "5.0",
                "strand_insulation" => "1.0",
                "coil_id" => "800.0",
                "ground_clearance" => "20.0",
                "sc_factor" => "1.8",
                "system_gva" => "15.0",
                _ => "0",
            };
            if col > 0 {
                text.push(' ');
            }
            text.push_str(value);
        }
        text.push('\n');
    }
    text
}

fn design_file(row_map: &str, num_columns: usize) -> String {
    let mut text = String::from("3 60.0 65.0 0 0 500.0 2000.0 4\n");
    text.push_str("115000 50000 D 1 1\n");
    for _ in 0..5 {
        text.push_str("0 0 W 0 1\n");
    }
    text.push_str(row_map);
    text.push('\n');
    text.push_str(&field_block(num_columns));
    text
}

#[test]
fn single_winding_bound_to_terminal_one() {
    let text = design_file("1 FALSE FALSE FALSE FALSE FALSE FALSE FALSE FALSE", 1);
    let tx = parse(&text).unwrap();

    assert_eq!(tx.num_phases, 3);
    assert_eq!(tx.frequency_hz, 60.0);
    assert_eq!(tx.terminals().count(), 6);
    assert_eq!(tx.num_windings(), 1);

    let (_, winding) = tx.windings().next().unwrap();
    let (slot, terminal) = tx.terminal_by_number(winding.terminal_number).unwrap();
    assert_eq!(slot.number(), 1);
    assert_eq!(terminal.andersen_number, 1);
}

#[test]
fn winding_count_matches_active_row_map_entries() {
    let text = design_file("1 FALSE 2 FALSE FALSE FALSE FALSE FALSE FALSE", 2);
    let tx = parse(&text).unwrap();
    assert_eq!(tx.num_windings(), 2);
}

#[test]
fn truncated_field_block_aborts_whole_import() {
    let mut text = design_file("1 FALSE FALSE FALSE FALSE FALSE FALSE FALSE FALSE", 1);
    // Drop the last two rows of the field block.
    let keep = text.lines().count() - 2;
    text = text.lines().take(keep).collect::<Vec<_>>().join("\n");
    assert_eq!(parse(&text).unwrap_err(), DesignError::InvalidDesignFile);
}
