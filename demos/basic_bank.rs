//! Basic banking session example

use bankist_core::utils::MemoryDirectory;
use bankist_core::{Bank, Session};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏦 Bankist Core - Basic Session Example\n");

    // Create a new bank with in-memory storage
    let storage = MemoryDirectory::new();
    let mut bank = Bank::new(storage);

    // 1. Seed the stock demo accounts
    println!("📇 Seeding Account Directory...");
    let accounts = bank.seed_demo_accounts().await?;

    for account in accounts.values() {
        println!(
            "  ✓ Opened account: {} ({}) at {}%",
            account.owner, account.username, account.interest_rate
        );
    }
    println!();

    // 2. Log in
    println!("🔐 Logging in as js...");
    let mut session = Session::new();
    let account = bank.login("js", 1111, &mut session).await?;
    println!("  Welcome back, {}!\n", account.first_name());

    // 3. Display the statement and summary
    println!("📜 Statement:");
    for line in bank.statement_of("js", false).await? {
        println!("  {:>2} {:?}: {}€", line.sequence, line.kind, line.amount);
    }
    println!();

    let summary = bank.summary_of("js").await?;
    println!("  Balance:  {}€", bank.balance_of("js").await?);
    println!("  In:       {}€", summary.total_in);
    println!("  Out:      {}€", summary.total_out);
    println!("  Interest: {}€", summary.total_interest);
    println!();

    // 4. Transfer funds to another account
    println!("💸 Transferring 500€ to jd...");
    bank.transfer("js", "jd", 500).await?;
    println!("  New balance: {}€", bank.balance_of("js").await?);
    println!("  jd balance:  {}€\n", bank.balance_of("jd").await?);

    // 5. Request a loan
    println!("🏦 Requesting a loan of 20000€...");
    match bank.request_loan("js", 20000).await {
        Ok(()) => println!("  ✓ Loan granted"),
        Err(e) => println!("  ❌ {}", e),
    }
    println!("  New balance: {}€\n", bank.balance_of("js").await?);

    // An oversized request is declined without touching the account
    println!("🏦 Requesting a loan of 900000€...");
    match bank.request_loan("js", 900_000).await {
        Ok(()) => println!("  ✓ Loan granted"),
        Err(e) => println!("  ❌ {}", e),
    }
    println!();

    // 6. Sorted view of the movements
    println!("🔀 Sorted statement:");
    for line in bank.statement_of("js", true).await? {
        println!("  {:>2} {:?}: {}€", line.sequence, line.kind, line.amount);
    }
    println!();

    // 7. Check directory integrity
    println!("🔍 Validating Directory Integrity...");
    let report = bank.validate_integrity().await?;
    println!("  Accounts:         {}", report.account_count);
    println!("  Combined balance: {}€", report.combined_balance);
    println!(
        "  Valid: {}",
        if report.is_valid { "✅ Yes" } else { "❌ No" }
    );
    println!();

    // 8. Close the account and end the session
    println!("🗑️ Closing the account...");
    let closed = bank.close_account("js", 1111).await?;
    session.invalidate_for(&closed.username);
    println!(
        "  ✓ Closed {}; {} accounts remain; session active: {}",
        closed.username,
        bank.list_accounts().await?.len(),
        session.is_active()
    );

    println!("\n🎉 Example completed successfully!");
    Ok(())
}
