use primeshare::rng::Csprng;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[test]
fn test_csprng_deterministic_from_seed() {
    let seed = [0x42u8; 32];

    let mut rng1 = Csprng::from_seed(seed);
    let mut rng2 = Csprng::from_seed(seed);

    let mut a = [0u8; 128];
    let mut b = [0u8; 128];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_eq!(a, b);
}

#[test]
fn test_csprng_rekey_changes_output() {
    let mut rng = Csprng::from_seed([0xAAu8; 32]);

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    rng.fill_bytes(&mut a);
    rng.fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn test_csprng_rekeys_after_fill() {
    let seed = [0x17u8; 32];

    let mut rng = Csprng::from_seed(seed);
    let mut stream = ChaCha20Rng::from_seed(seed);

    let mut first = [0u8; 64];
    let mut expected_first = [0u8; 64];
    rng.fill_bytes(&mut first);
    stream.fill_bytes(&mut expected_first);

    // The first fill is plain ChaCha20 output.
    assert_eq!(first, expected_first);

    // The next fill comes from a new key, not from the original stream.
    let mut second = [0u8; 64];
    let mut continued = [0u8; 64];
    rng.fill_bytes(&mut second);
    stream.fill_bytes(&mut continued);

    assert_ne!(second, continued);
}

#[test]
fn test_csprng_not_all_zero() {
    let mut rng = Csprng::from_seed([0u8; 32]);

    let mut out = [0u8; 64];
    rng.fill_bytes(&mut out);

    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn test_csprng_os_seeded_instances_differ() {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];

    Csprng::new().fill_bytes(&mut a);
    Csprng::default().fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn test_csprng_try_fill_bytes() {
    let mut rng = Csprng::from_seed([0x01u8; 32]);
    let mut out = [0u8; 48];

    assert!(rng.try_fill_bytes(&mut out).is_ok());
    assert!(out.iter().any(|&b| b != 0));
}
