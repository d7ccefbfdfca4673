use casepaths_proc::Casepaths;
use rust_case_paths::CasePath;

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Casepaths)]
enum Status {
    Active(User),
    Suspended(String),
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Casepaths)]
enum Account {
    Open(Status),
    Closed,
}

fn main() {
    let status_active = Status::active_case();

    let status = Status::Active(User {
        id: 42,
        name: "Charlie".to_string(),
    });

    if let Some(user) = status_active.extract(&status) {
        println!("Extracted user: {:?}", user);
    }

    let embedded = status_active.embed(User {
        id: 99,
        name: "Diana".to_string(),
    });
    println!("Embedded back: {:?}", embedded);

    // Compose across nested enums
    let open_active = Account::open_case().then(Status::active_case());
    let account = Account::Open(status.clone());
    println!("Deep extract: {:?}", open_active.extract(&account));
    println!("Path renders as: {:?}", open_active);

    // Modify in place through the composed path
    let mut account = account;
    open_active.modify(&mut account, |user| user.name.push_str(" (admin)"));
    println!("After modify: {:?}", account);

    // One type-erased accessor per variant
    for case in Status::case_paths() {
        println!("{} matches: {}", case.name(), case.matches(&status));
    }

    // Reverse lookup: which accessor produced this instance?
    println!("Produced by: {}", status.case_path().name());
    let suspended = Status::Suspended("under review".to_string());
    println!("Produced by: {}", suspended.case_path().name());

    // Extraction fails gracefully on the wrong variant
    println!("Closed: {:?}", open_active.extract(&Account::Closed));
    println!("Inactive: {:?}", status_active.extract(&Status::Inactive));
}
