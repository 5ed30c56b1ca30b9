//! Checking a list of passwords for reuse with a Bloom filter.
use seenset::{check_items, BloomFilter, Classification, Error};

fn main() -> Result<(), Error> {
    let mut filter = BloomFilter::new(1000, 3)?;

    // Passwords already in use.
    for password in ["password123", "admin123", "qwerty123"] {
        filter.add(&password);
    }

    // Candidate passwords, checked in order.
    let candidates = ["password123", "newpassword", "admin123", "guest"];

    for (password, classification) in check_items(&mut filter, candidates) {
        let status = match classification {
            Classification::Invalid => "invalid",
            Classification::AlreadySeen => "already in use",
            Classification::NewlyRecorded => "unique",
        };
        println!("Password '{}': {}.", password, status);
    }

    Ok(())
}
