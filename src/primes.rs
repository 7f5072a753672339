//! Prime enumeration, the CPU/correctness exercise at the heart of the
//! diagnostic.

/// All primes strictly less than `max`, ascending.
///
/// Classic sieve of Eratosthenes with a negative list: every candidate starts
/// marked prime, then multiples of each surviving value up to `sqrt(max)` are
/// struck out. Data memory consumption is roughly proportional to `max`.
/// Deterministic across runs and platforms; `max <= 2` yields no primes.
pub fn primes_below(max: u32) -> Vec<u32> {
    if max <= 2 {
        return Vec::new();
    }
    let max = max as usize;
    let mut is_prime = vec![true; max];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2;
    while i * i < max {
        if is_prime[i] {
            let mut j = i * i;
            while j < max {
                is_prime[j] = false;
                j += i;
            }
        }
        i += 1;
    }

    (2..max).filter(|&n| is_prime[n]).map(|n| n as u32).collect()
}
