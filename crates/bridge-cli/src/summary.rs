use bridge_core::DashboardView;
use bridge_core::aggregate::FacetCount;
use bridge_model::{BridgeType, DatasetSummary, StockMode};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::ReportResult;

pub fn print_summary(result: &ReportResult) {
    let view = &result.view;
    print_datasets(&view.datasets);
    println!(
        "Active datasets: {}  Bridges: {}  Total length: {:.2} km  Grade III/IV: {}",
        view.kpis.active_datasets, view.kpis.bridges, view.kpis.total_length_km, view.kpis.flagged
    );
    print_stock(view);
    print_grades(view);
    print_lengths(view);
    print_years(view);
    print_prestress(view);
    println!(
        "Culverts: {} of {}  Map: {} placed, {} without coordinates",
        view.culvert_totals.culvert,
        view.culvert_totals.culvert + view.culvert_totals.non_culvert,
        view.map.points.len(),
        view.map.missing
    );
    if !result.notices.is_empty() {
        eprintln!("Notices:");
        for notice in &result.notices {
            eprintln!("- {notice}");
        }
    }
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_datasets(datasets: &[DatasetSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Label"),
        header_cell("Source"),
        header_cell("Bridges"),
        header_cell("Length (km)"),
        header_cell("III/IV"),
        header_cell("Inspected"),
        header_cell("Built"),
        header_cell("Coords"),
    ]);
    apply_table_style(&mut table);
    for column in 3..=6 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for summary in datasets {
        let stats = &summary.stats;
        let id_cell = if summary.active {
            Cell::new(summary.id).fg(Color::Blue).add_attribute(Attribute::Bold)
        } else {
            dim_cell(format!("{} (inactive)", summary.id))
        };
        table.add_row(vec![
            id_cell,
            Cell::new(&summary.label),
            Cell::new(&summary.source_name),
            Cell::new(stats.bridge_count),
            Cell::new(format!("{:.2}", stats.total_length_km)),
            count_cell(stats.flagged_count, Color::Red),
            Cell::new(format!("{:.1}%", stats.inspection_rate * 100.0)),
            Cell::new(stats.year_range),
            Cell::new(format!("{}/{}", stats.with_coords, stats.bridge_count)),
        ]);
    }
    println!("{table}");
}

fn print_stock(view: &DashboardView) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Group"), header_cell(view.stock.value_label)]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &view.stock.entries {
        let value = match view.stock.mode {
            StockMode::Count => format!("{}", entry.value),
            StockMode::Length => format!("{:.2}", entry.value),
        };
        table.add_row(vec![Cell::new(&entry.label), Cell::new(value)]);
    }
    println!("{table}");
}

fn print_grades(view: &DashboardView) {
    let mut header = vec![header_cell("Type")];
    header.extend(view.grades.levels.iter().map(|level| header_cell(level.as_str())));
    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    for row in &view.grades.rows {
        let mut cells = vec![type_cell(row.bridge_type)];
        cells.extend(row.counts.iter().map(|&count| Cell::new(count)));
        table.add_row(cells);
    }
    println!("{table}");
}

fn print_lengths(view: &DashboardView) {
    let histogram = &view.length_histogram;
    if histogram.bins.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Length"),
        header_cell("Bridges"),
        header_cell("Length (km)"),
        header_cell("Cumulative"),
    ]);
    apply_table_style(&mut table);
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for (bin, percent) in histogram.bins.iter().zip(&histogram.cumulative_percent) {
        table.add_row(vec![
            Cell::new(&bin.label),
            Cell::new(bin.count),
            Cell::new(format!("{:.3}", bin.length_km)),
            Cell::new(format!("{percent:.1}%")),
        ]);
    }
    println!("{table}");
}

fn print_years(view: &DashboardView) {
    let stack = &view.year_stack;
    if stack.buckets.is_empty() {
        return;
    }
    let mut header = vec![header_cell("Built")];
    header.extend(BridgeType::ALL.iter().map(|ty| header_cell(ty.label())));
    header.push(header_cell("Cumulative"));
    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    for (bucket, percent) in stack.buckets.iter().zip(&stack.cumulative_percent) {
        let mut cells = vec![Cell::new(&bucket.label)];
        cells.extend(
            BridgeType::ALL
                .iter()
                .map(|ty| Cell::new(bucket.counts.get(ty).copied().unwrap_or(0))),
        );
        cells.push(Cell::new(format!("{percent:.1}%")));
        table.add_row(cells);
    }
    println!("{table}");
}

fn print_prestress(view: &DashboardView) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("PC facet"), header_cell("Bridges")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for FacetCount { facet, count } in &view.tension_totals {
        table.add_row(vec![Cell::new(facet.as_str()), Cell::new(count)]);
    }
    for FacetCount { facet, count } in &view.post_totals {
        table.add_row(vec![
            Cell::new(format!("  post / {}", facet.label())),
            Cell::new(count),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn type_cell(bridge_type: BridgeType) -> Cell {
    let color = match bridge_type {
        BridgeType::Pc => Color::Blue,
        BridgeType::Rc => Color::Green,
        BridgeType::Steel => Color::Magenta,
        BridgeType::Other => Color::DarkGrey,
    };
    Cell::new(bridge_type.label()).fg(color)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
