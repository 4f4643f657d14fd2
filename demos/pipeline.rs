//! Chains the sequence operations over a small list of user records.
//!
//! Run with: cargo run --example pipeline

use seqops::predicate::{contains, negate};
use seqops::{every, filter, find, map, reduce, some};

#[derive(Debug, Clone, Default, PartialEq)]
struct User {
    email: String,
    verified: bool,
    logins: u32,
}

impl User {
    fn new(email: &str, verified: bool, logins: u32) -> Self {
        Self {
            email: email.to_string(),
            verified,
            logins,
        }
    }
}

fn main() {
    println!("========================================");
    println!(" seqops pipeline demo");
    println!("========================================\n");

    let users = vec![
        User::new("alice@chains.io", false, 3),
        User::new("bob@chains.io", true, 12),
        User::new("jane@links.io", true, 0),
        User::new("carol@chains.io", false, 7),
    ];

    let emails = map(&users, |u| u.email.clone());
    let chains = filter(&emails, contains("@chains.io"));
    println!("Users on chains.io: {:?}", chains);

    let pending = filter(&users, |u| !u.verified);
    println!("Pending verification: {}", pending.len());

    let verified = map(&pending, |u| User {
        verified: true,
        ..u.clone()
    });
    println!("All verified after update? {}", every(&verified, |u| u.verified));

    let (idle, found) = find(&users, |u| u.logins == 0);
    if found {
        println!("First idle user: {}", idle.email);
    }

    let total = reduce(&users, |acc: u32, u| acc + u.logins, 0);
    println!("Total logins: {}", total);

    let outside = some(&emails, negate(contains("@chains.io")));
    println!("Anyone outside chains.io? {}", outside);
}
