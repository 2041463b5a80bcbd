//! The design-file parser proper.

use std::collections::HashMap;

use cs_core::TermSlot;
use cs_model::{
    ANDERSEN_VIRTUAL, AxialGaps, CableType, Connection, CoreDims, Ducts, RadialSpacer, Terminal,
    Transformer, TurnCounts, TurnDefinition, Winding, WindingType,
};
use tracing::{debug, info};

use crate::error::{DesignError, DesignResult};
use crate::schema::{COLUMN_UNUSED, FieldScope, NUM_WINDING_COLUMNS, WINDING_FIELDS};
use crate::tokens::{Row, Token, TokenStream, tokenize};

/// Oldest file revision the parser understands.
pub const MIN_FILE_VERSION: u32 = 4;

const HEADER_TOKENS: usize = 8;
const TERMINAL_ROW_TOKENS: usize = 5;

/// Parse a legacy design file into a fresh [`Transformer`].
///
/// The parse is atomic: any failure aborts the whole import and no
/// partially-built model escapes.
pub fn parse(text: &str) -> DesignResult<Transformer> {
    let rows = tokenize(text);
    if rows.len() < 8 {
        return Err(DesignError::InvalidDesignFile);
    }

    let mut tx = parse_header(&rows[0])?;
    parse_terminals(&mut tx, &rows[1..7])?;
    let active_columns = parse_row_map(&rows[7])?;
    parse_winding_block(&mut tx, &rows[8..], &active_columns)?;

    info!(
        windings = tx.num_windings(),
        terminals = tx.terminals().filter(|(_, t)| t.is_some()).count(),
        "design file imported"
    );
    Ok(tx)
}

fn parse_header(header: &Row<'_>) -> DesignResult<Transformer> {
    if header.tokens.len() != HEADER_TOKENS {
        return Err(DesignError::InvalidDesignFile);
    }

    // A non-integer version token means this is not a design file at all.
    let version = header.tokens[7]
        .text
        .parse::<u32>()
        .map_err(|_| DesignError::InvalidDesignFile)?;
    if version < MIN_FILE_VERSION {
        return Err(DesignError::InvalidFileVersion {
            found: version,
            minimum: MIN_FILE_VERSION,
        });
    }

    // Tokens 3 and 4 are unused in every supported revision.
    Ok(Transformer::new(
        header.tokens[0].as_u32()?,
        header.tokens[1].as_f64()?,
        header.tokens[2].as_f64()?,
        CoreDims {
            diameter_mm: header.tokens[5].as_f64()?,
            window_height_mm: header.tokens[6].as_f64()?,
        },
    ))
}

fn parse_terminals(tx: &mut Transformer, rows: &[Row<'_>]) -> DesignResult<()> {
    for (slot, row) in TermSlot::all().zip(rows) {
        if row.tokens.len() != TERMINAL_ROW_TOKENS {
            return Err(DesignError::InvalidDesignFile);
        }

        let voltage_v = row.tokens[0].as_f64()?;
        if voltage_v == 0.0 {
            // Zero voltage marks an empty slot; the row is still consumed.
            continue;
        }

        tx.set_terminal(
            slot,
            Some(Terminal {
                name: format!("T{}", slot.number()),
                voltage_v,
                // File stores kVA.
                va: row.tokens[1].as_f64()? * 1000.0,
                connection: connection_from_code(row.tokens[2].text),
                current_direction: direction(&row.tokens[4])?,
                andersen_number: row.tokens[3].as_u32()?,
            }),
        );
    }
    Ok(())
}

fn connection_from_code(code: &str) -> Connection {
    // The file encodes only these three explicitly; everything else is wye.
    match code {
        "D" => Connection::Delta,
        "ZIG" => Connection::Zig,
        "ZAG" => Connection::Zag,
        _ => Connection::Wye,
    }
}

fn direction(tok: &Token<'_>) -> DesignResult<i8> {
    match tok.text.parse::<i64>() {
        Ok(1) => Ok(1),
        Ok(-1) => Ok(-1),
        _ => Err(DesignError::InvalidValue { line: tok.line }),
    }
}

/// Indices (0-based) of the winding columns flagged active by the row-map.
fn parse_row_map(row: &Row<'_>) -> DesignResult<Vec<usize>> {
    if row.tokens.len() != NUM_WINDING_COLUMNS {
        return Err(DesignError::InvalidDesignFile);
    }

    let mut active = Vec::new();
    for (col, tok) in row.tokens.iter().enumerate() {
        if tok.text == COLUMN_UNUSED {
            continue;
        }
        // The row index must parse but only activeness is used.
        tok.as_u32()?;
        active.push(col);
    }
    Ok(active)
}

/// Per-column token bag collected by the field-major scan.
#[derive(Debug, Default, Clone)]
struct ColumnValues<'a> {
    values: HashMap<&'static str, Token<'a>>,
}

impl<'a> ColumnValues<'a> {
    fn token(&self, name: &'static str) -> DesignResult<Token<'a>> {
        // Absent only if the schema table itself is inconsistent.
        self.values
            .get(name)
            .copied()
            .ok_or(DesignError::InvalidDesignFile)
    }

    fn f64(&self, name: &'static str) -> DesignResult<f64> {
        self.token(name)?.as_f64()
    }

    fn u32(&self, name: &'static str) -> DesignResult<u32> {
        self.token(name)?.as_u32()
    }

    fn flag(&self, name: &'static str) -> DesignResult<bool> {
        self.token(name)?.as_flag()
    }
}

fn parse_winding_block(
    tx: &mut Transformer,
    rows: &[Row<'_>],
    active_columns: &[usize],
) -> DesignResult<()> {
    if active_columns.is_empty() {
        // No active columns, no field block.
        return Ok(());
    }

    let mut stream = TokenStream::from_rows(rows);
    let mut columns = vec![ColumnValues::default(); active_columns.len()];

    // Field-major: descriptors outer, active columns inner.
    for desc in WINDING_FIELDS {
        match desc.scope {
            FieldScope::AllColumns => {
                for values in &mut columns {
                    let tok = stream.next()?;
                    if !desc.skip {
                        values.values.insert(desc.name, tok);
                    }
                }
            }
            FieldScope::FirstColumnOnly => {
                let tok = stream.next()?;
                if !desc.skip {
                    columns[0].values.insert(desc.name, tok);
                }
            }
        }
    }

    for (values, &col) in columns.iter().zip(active_columns) {
        let winding = build_winding(tx, values)?;
        debug!(
            column = col,
            terminal = winding.terminal_number,
            "parsed winding column"
        );
        tx.add_winding(winding);
    }

    // The two absolute-position legacy fields belong to the whole design.
    tx.sc_factor = columns[0].f64("sc_factor")?;
    tx.system_gva = columns[0].f64("system_gva")?;
    Ok(())
}

fn build_winding(tx: &Transformer, values: &ColumnValues<'_>) -> DesignResult<Winding> {
    let terminal_tok = values.token("terminal")?;
    let terminal_number = terminal_tok.as_u32()?;
    if terminal_number != ANDERSEN_VIRTUAL && tx.terminal_by_number(terminal_number).is_none() {
        return Err(DesignError::InvalidValue {
            line: terminal_tok.line,
        });
    }

    Ok(Winding {
        winding_type: winding_type(&values.token("winding_type")?)?,
        is_spiral: values.flag("spiral")?,
        is_double_stack: values.flag("double_stack")?,
        turns: TurnCounts {
            min: values.f64("min_turns")?,
            nom: values.f64("nom_turns")?,
            max: values.f64("max_turns")?,
        },
        elec_height_mm: values.f64("elec_height")?,
        axial_sections: values.u32("axial_sections")?,
        radial_spacer: RadialSpacer {
            thickness_mm: values.f64("spacer_thickness")?,
            width_mm: values.f64("spacer_width")?,
        },
        axial_columns: values.u32("axial_columns")?,
        radial_sections: values.u32("radial_sections")?,
        radial_insulation_mm: values.f64("radial_insulation")?,
        ducts: Ducts {
            count: values.u32("duct_count")?,
            dim_mm: values.f64("duct_dim")?,
        },
        radial_supports: values.u32("radial_supports")?,
        turn_def: TurnDefinition {
            cable_type: cable_type(&values.token("cable_type")?)?,
            strand_axial_mm: values.f64("strand_axial")?,
            strand_radial_mm: values.f64("strand_radial")?,
            num_ctc_strands: values.u32("ctc_strands")?,
            num_cables_axial: values.u32("cables_axial")?,
            num_cables_radial: values.u32("cables_radial")?,
            strand_insulation_mm: values.f64("strand_insulation")?,
            cable_insulation_mm: values.f64("cable_insulation")?,
            internal_insulation_mm: values.f64("internal_insulation")?,
        },
        axial_gaps: AxialGaps {
            center_mm: values.f64("gap_center")?,
            bottom_mm: values.f64("gap_bottom")?,
            top_mm: values.f64("gap_top")?,
        },
        bottom_edge_pack_mm: values.f64("bottom_edge_pack")?,
        coil_id_mm: values.f64("coil_id")?,
        radial_overbuild_pct: values.f64("overbuild")?,
        ground_clearance_mm: values.f64("ground_clearance")?,
        terminal_number,
        layers: Vec::new(),
    })
}

fn winding_type(tok: &Token<'_>) -> DesignResult<WindingType> {
    match tok.text.parse::<u32>() {
        Ok(1) => Ok(WindingType::Disc),
        Ok(2) => Ok(WindingType::Helix),
        Ok(3) => Ok(WindingType::Sheet),
        Ok(4) => Ok(WindingType::Layer),
        Ok(5) => Ok(WindingType::Section),
        Ok(6) => Ok(WindingType::MultiStart),
        _ => Err(DesignError::InvalidValue { line: tok.line }),
    }
}

fn cable_type(tok: &Token<'_>) -> DesignResult<CableType> {
    match tok.text.parse::<u32>() {
        Ok(1) => Ok(CableType::Single),
        Ok(2) => Ok(CableType::Twin),
        Ok(3) => Ok(CableType::Ctc),
        _ => Err(DesignError::InvalidValue { line: tok.line }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_must_have_eight_tokens() {
        let text = "3 60.0 65.0 0 0 500.0 2000.0\n";
        assert_eq!(parse(text).unwrap_err(), DesignError::InvalidDesignFile);
    }

    #[test]
    fn non_integer_version_is_structural() {
        let text = sample_with_version("4.5");
        assert_eq!(parse(&text).unwrap_err(), DesignError::InvalidDesignFile);
    }

    #[test]
    fn old_version_rejected() {
        let text = sample_with_version("3");
        assert_eq!(
            parse(&text).unwrap_err(),
            DesignError::InvalidFileVersion {
                found: 3,
                minimum: MIN_FILE_VERSION
            }
        );
    }

    #[test]
    fn garbage_token_reports_its_line() {
        // Frequency replaced by a word on line 1.
        let mut text = sample_with_version("4");
        text = text.replacen("60.0", "sixty", 1);
        assert_eq!(
            parse(&text).unwrap_err(),
            DesignError::InvalidValue { line: 1 }
        );
    }

    #[test]
    fn zero_voltage_rows_leave_slots_empty() {
        let tx = parse(&sample_with_version("4")).unwrap();
        let filled: Vec<_> = tx
            .terminals()
            .filter_map(|(slot, t)| t.map(|_| slot.number()))
            .collect();
        assert_eq!(filled, vec![1]);
    }

    #[test]
    fn no_active_columns_means_no_windings() {
        let header = "3 60.0 65.0 0 0 500.0 2000.0 4\n";
        let terminals = "0 0 W 0 1\n".repeat(6);
        let row_map = "FALSE FALSE FALSE FALSE FALSE FALSE FALSE FALSE FALSE\n";
        let tx = parse(&format!("{header}{terminals}{row_map}")).unwrap();
        assert_eq!(tx.num_windings(), 0);
    }

    #[test]
    fn winding_binds_to_unknown_terminal_fails() {
        // Terminal field says 9 but only Andersen number 1 exists.
        let text = sample_with_field("terminal", "9");
        assert!(matches!(
            parse(&text).unwrap_err(),
            DesignError::InvalidValue { .. }
        ));
    }

    #[test]
    fn row_map_value_beyond_activeness_is_ignored() {
        // Any integer works as an "active" marker.
        let base = sample_with_version("4");
        let swapped = base.replacen(
            "1 FALSE FALSE FALSE FALSE FALSE FALSE FALSE FALSE",
            "42 FALSE FALSE FALSE FALSE FALSE FALSE FALSE FALSE",
            1,
        );
        let tx = parse(&swapped).unwrap();
        assert_eq!(tx.num_windings(), 1);
    }

    /// One delta terminal in slot 1, one winding in column 0.
    fn sample_with_version(version: &str) -> String {
        sample(version, &[])
    }

    fn sample_with_field(name: &str, value: &str) -> String {
        sample("4", &[(name, value)])
    }

    pub(crate) fn sample(version: &str, overrides: &[(&str, &str)]) -> String {
        let mut text = format!("3 60.0 65.0 0 0 500.0 2000.0 {version}\n");
        text.push_str("115000 50000 D 1 1\n");
        for _ in 0..5 {
            text.push_str("0 0 W 0 1\n");
        }
        text.push_str("1 FALSE FALSE FALSE FALSE FALSE FALSE FALSE FALSE\n");

        for desc in WINDING_FIELDS {
            let value = overrides
                .iter()
                .find(|(name, _)| *name == desc.name)
                .map(|(_, v)| *v)
                .unwrap_or(default_field_value(desc.name));
            text.push_str(value);
            text.push('\n');
        }
        text
    }

    fn default_field_value(name: &str) -> &'static str {
        match name {
            "terminal" => "1",
            "winding_type" => "1",
            "min_turns" => "95",
            "nom_turns" => "100",
            "max_turns" => "105",
            "elec_height" => "2000.0",
            "spiral" | "double_stack" => "0",
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
            "cable_insulation" | "internal_insulation" => "0.0",
            "ctc_strands" => "0",
            "gap_center" | "gap_bottom" | "gap_top" => "0.0",
            "bottom_edge_pack" => "0.0",
            "coil_id" => "800.0",
            "overbuild" => "0.0",
            "ground_clearance" => "20.0",
            "sc_factor" => "1.8",
            "system_gva" => "15.0",
            // Legacy skipped rows still need a token.
            _ => "0",
        }
    }

    #[test]
    fn full_single_column_import() {
        let tx = parse(&sample_with_version("4")).unwrap();
        assert_eq!(tx.num_phases, 3);
        assert_eq!(tx.frequency_hz, 60.0);
        assert_eq!(tx.temp_rise_c, 65.0);
        assert_eq!(tx.core.diameter_mm, 500.0);
        assert_eq!(tx.core.window_height_mm, 2000.0);
        assert_eq!(tx.sc_factor, 1.8);
        assert_eq!(tx.system_gva, 15.0);
        assert_eq!(tx.num_windings(), 1);

        let (_, winding) = tx.windings().next().unwrap();
        assert_eq!(winding.terminal_number, 1);
        assert_eq!(winding.turns.nom, 100.0);
        assert!(winding.has_taps());

        let terminal = tx.terminal_by_number(1).unwrap().1;
        assert_eq!(terminal.va, 50_000_000.0);
        assert_eq!(terminal.connection, Connection::Delta);
    }
}
