use da_core::{NewUserRecord, SeedEntry};

/// Alice with both identifiers
pub fn alice() -> NewUserRecord {
    NewUserRecord::new("Alice", "a@x.com")
        .with_identifier_a("123456789012")
        .with_identifier_b("ABCDE1234F")
}

/// Bob with identifier A only
pub fn bob() -> NewUserRecord {
    NewUserRecord::new("Bob", "b@x.com").with_identifier_a("210987654321")
}

/// Carol without identifiers
pub fn carol() -> NewUserRecord {
    NewUserRecord::new("Carol", "c@x.com")
}

/// Seed mapping with the three fixture users
pub fn seed_entries() -> Vec<SeedEntry> {
    vec![
        SeedEntry::new("alice", alice()),
        SeedEntry::new("bob", bob()),
        SeedEntry::new("carol", carol()),
    ]
}
