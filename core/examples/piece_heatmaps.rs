use heatmap_core::{Bounds, Cell, DistanceField, OBSTACLE, UNREACHABLE, catalog, compute_distance_field};

fn print_field(field: &DistanceField) {
    for row in field.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&value| match value {
                UNREACHABLE => format!("{:>3}", "-"),
                OBSTACLE => format!("{:>3}", "X"),
                distance => format!("{:>3}", distance),
            })
            .collect();
        println!("{}", cells.join(" "));
    }
}

fn demonstrate(name: &str, size: i32, start: Option<Cell>) -> Result<(), Box<dyn std::error::Error>> {
    let bounds = Bounds::square(size)?;
    let piece = catalog()
        .get(name)
        .ok_or_else(|| format!("unknown piece: {}", name))?;
    let start = start.unwrap_or_else(|| bounds.center());

    let field = compute_distance_field(bounds, &piece.offsets(bounds), start, &[])?;

    println!("\n{} - starting from {}", piece.name.to_uppercase(), start);
    println!("{}", "=".repeat(piece.name.len() + 20));
    print_field(&field);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Jump patterns compared on a 10x10 board:");
    for name in ["knight", "camel", "zebra", "giraffe"] {
        demonstrate(name, 10, Some(Cell::new(5, 5)))?;
    }

    println!("\nShogi pieces move towards higher rows:");
    demonstrate("gold general", 9, Some(Cell::new(4, 4)))?;
    demonstrate("shogi knight", 9, Some(Cell::new(1, 4)))?;
    demonstrate("shogi lance", 9, Some(Cell::new(0, 4)))?;

    Ok(())
}
