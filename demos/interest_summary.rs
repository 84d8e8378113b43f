//! Movement summary and interest calculation examples

use bankist_core::{compute_balance, sorted_view, statement, AccountSummary};
use bigdecimal::BigDecimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧮 Bankist Core - Summary Calculation Examples\n");

    let movements: Vec<i64> = vec![200, 450, -400, 3000, -650, -130, 70, 1300];

    // 1. Balance
    println!("💰 Balance:");
    println!("  Movements: {:?}", movements);
    println!("  Balance:   {}€\n", compute_balance(&movements));

    // 2. Summary at different interest rates
    println!("📈 Summaries by Interest Rate:");
    for tenths in [7i64, 10, 12, 15] {
        let rate = BigDecimal::from(tenths) / BigDecimal::from(10);
        let summary = AccountSummary::calculate(&movements, &rate);
        println!(
            "  {}%: in {}€, out {}€, interest {}€",
            rate, summary.total_in, summary.total_out, summary.total_interest
        );
    }
    println!();

    // 3. The interest threshold in action
    println!("🚧 Interest Threshold:");
    let rate = BigDecimal::from(12) / BigDecimal::from(10);
    for deposit in [70i64, 83, 84, 200, 3000] {
        let single = AccountSummary::calculate(&[deposit], &rate);
        if single.total_interest > 0 {
            println!("  deposit {}€ earns {}€", deposit, single.total_interest);
        } else {
            println!("  deposit {}€ earns nothing (below 1€ threshold)", deposit);
        }
    }
    println!();

    // 4. Sorted views
    println!("🔀 Sorted Views:");
    println!("  Ascending:  {:?}", sorted_view(&movements, true));
    println!("  Descending: {:?}", sorted_view(&movements, false));
    println!("  Original:   {:?} (untouched)", movements);
    println!();

    // 5. Statement rows
    println!("📜 Statement Rows:");
    for line in statement(&movements, false) {
        println!("  {:>2} {:?}: {}€", line.sequence, line.kind, line.amount);
    }

    println!("\n🎉 Summary examples completed successfully!");

    Ok(())
}
