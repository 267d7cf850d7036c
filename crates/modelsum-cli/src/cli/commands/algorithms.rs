//! `modelsum algorithms` – list the digest registry.

use modelsum_core::digest;

pub fn run_algorithms() {
    println!("{:<10} {:<10} {}", "ID", "NAME", "BITS");
    for alg in digest::registry() {
        println!("{:<10} {:<10} {}", alg.id(), alg.name(), alg.digest_len() * 8);
    }
}
