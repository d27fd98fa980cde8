//! Output formatting module

use haisou_app::app::BalanceRunResult;
use haisou_types::{OutputFormat, Result};

pub fn output_result(output_format: OutputFormat, result: &BalanceRunResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
    } else {
        // Table format
        println!("\nBalanced Delivery Plan");
        println!("======================");
        println!("Capacity per slot: {}", result.capacity_per_slot);
        println!("Rows:              {}", result.rows.len());
        println!("Slots:             {}", result.slot_labels.len());
        println!("Containers placed: {}", result.total_balanced());
        println!("Unassigned:        {}", result.overflow.total_unassigned());

        println!("\nPer-slot totals");
        println!("---------------");
        for (label, &total) in result.slot_labels.iter().zip(&result.totals.per_slot) {
            println!(
                "{:>8}  {:>5} / {}",
                label, total, result.capacity_per_slot
            );
        }
    }

    Ok(())
}
