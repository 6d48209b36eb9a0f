/// Logical, frontend-independent key identifiers.
///
/// Frontends translate their native key events into this set; each machine
/// decides what the keys mean for its own input hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Num1,
    Num2,
    Num3,
    Num4,
    Q,
    W,
    E,
    R,
    A,
    S,
    D,
    F,
    Z,
    X,
    C,
    V,
    Escape,
    None,
}
