//! Formatting property fuzzer.
//!
//! Decodes the input into an element list and checks that:
//! 1. All-empty lists format as `NONE`
//! 2. Other lists are the `", "`-join of every element, in order
//! 3. Each element follows the reference or constraint grammar
//! 4. Formatting is deterministic and highlighting only adds markers

use honggfuzz::fuzz;
use settings_profile_sql::testing::test_format_properties;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            test_format_properties(data);
        });
    }
}
