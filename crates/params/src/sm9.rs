//! Constants for the SM9 BN256 curve (GB/T 38635)

/// Size of a serialized base field element in bytes
pub const SM9_FIELD_SIZE: usize = 32;

/// Size of a serialized scalar in bytes
pub const SM9_SCALAR_SIZE: usize = 32;

/// Size of a serialized target group element in bytes (twelve field elements)
pub const SM9_GT_SIZE: usize = 12 * SM9_FIELD_SIZE;

/// Base field modulus p
pub const SM9_P: &str = "B640000002A3A6F1D603AB4FF58EC74521F2934B1A7AEEDBE56F9B27E351457D";

/// Group order n
pub const SM9_N: &str = "B640000002A3A6F1D603AB4FF58EC74449F2934B18EA8BEEE56EE19CD69ECF25";

/// Curve coefficient b of `y^2 = x^3 + b`
pub const SM9_B: u64 = 5;

/// x-coordinate of the G1 generator P1
pub const SM9_P1_X: &str = "93DE051D62BF718FF5ED0704487D01D6E1E4086909DC3280E8C4E4817C66DDDD";

/// y-coordinate of the G1 generator P1
pub const SM9_P1_Y: &str = "21FE8DDA4F21E607631065125C395BBC1C1C00CBFA6024350C464CD70A3EA616";

/// x-coordinate of the G2 generator P2, constant term
pub const SM9_P2_X0: &str = "3722755292130B08D2AAB97FD34EC120EE265948D19C17ABF9B7213BAF82D65B";

/// x-coordinate of the G2 generator P2, coefficient of u
pub const SM9_P2_X1: &str = "85AEF3D078640C98597B6027B441A01FF1DD2C190F5E93C454806C11D8806141";

/// y-coordinate of the G2 generator P2, constant term
pub const SM9_P2_Y0: &str = "A7CF28D519BE3DA65F3170153D278FF247EFBA98A71A08116215BBA5C999A7C7";

/// y-coordinate of the G2 generator P2, coefficient of u
pub const SM9_P2_Y1: &str = "17509B092E845C1266BA0D262CBEE6ED0736A96FA347C8BD856DC76B84EBEB96";

/// Frobenius constant alpha1 for the `w` slot
pub const SM9_ALPHA1: &str = "3F23EA58E5720BDB843C6CFA9C08674947C5C86E0DDD04EDA91D8354377B698B";

/// Frobenius constant alpha2 for the `w^2` slot
pub const SM9_ALPHA2: &str = "0000000000000000F300000002A3A6F2780272354F8B78F4D5FC11967BE65334";

/// Frobenius constant alpha3 for the `v` slot
pub const SM9_ALPHA3: &str = "6C648DE5DC0A3F2CF55ACC93EE0BAF159F9D411806DC5177F5B21FD3DA24D011";

/// Frobenius constant alpha4 for the `v·w` slot
pub const SM9_ALPHA4: &str = "0000000000000000F300000002A3A6F2780272354F8B78F4D5FC11967BE65333";

/// Frobenius constant alpha5 for the `v·w^2` slot
pub const SM9_ALPHA5: &str = "2D40A38CF6983351711E5F99520347CC57D778A9F8FF4C8A4C949C7FA2A96686";

/// Twist constant beta used by the cube Frobenius (an element of Fp embedded in Fp2)
pub const SM9_BETA: &str = "6C648DE5DC0A3F2CF55ACC93EE0BAF159F9D411806DC5177F5B21FD3DA24D011";

/// Large exponent a2 of the hard part of the final exponentiation
pub const SM9_HARD_EXP_A2: &str = "00000000000000000000000000000000D8000000019062ED0000B98B0CB27659";

/// Small exponent a3 of the hard part of the final exponentiation
pub const SM9_HARD_EXP_A3: &str = "000000000000000000000000000000000000000000000002400000000215D941";

/// Fixed exponent applied to `frob1(f)·f` in the hard part
pub const SM9_HARD_EXP_NINE: u64 = 9;

/// Signed-digit addition chain driving the production Miller loop.
///
/// `0` doubles, `1` doubles then adds Q, `2` doubles then adds -Q.
pub const SM9_MILLER_CHAIN: &str =
    "00100000000000000000000000000000000000010001020200020200101000020";
