//! Reference values from the GB/T 38635 signature example

use sm9pair::algorithms::{Fp2, G2Affine};
use sm9pair::api::Result;

/// Master public key `Ppub = [ks]P2`, coordinates as `(c0, c1)` pairs.
pub const PPUB_X: (&str, &str) = (
    "29DBA116152D1F786CE843ED24A3B573414D2177386A92DD8F14D65696EA5E32",
    "9F64080B3084F733E48AFF4B41B565011CE0711C5E392CFB0AB1B6791B94C408",
);

/// See [`PPUB_X`].
pub const PPUB_Y: (&str, &str) = (
    "41E00A53DDA532DA1A7CE027B7A46F741006E85F5CDFF0730E75C05FB4E3216D",
    "69850938ABEA0112B57329F447E3A0CBAD3E2FDB1A77F335E89E1408D0EF1C25",
);

/// Uncompressed encoding of `Ppub`: `x1 || x0 || y1 || y0`.
pub fn ppub_bytes() -> Vec<u8> {
    [PPUB_X.1, PPUB_X.0, PPUB_Y.1, PPUB_Y.0]
        .iter()
        .flat_map(|s| hex::decode(s).unwrap_or_default())
        .collect()
}

/// `Ppub` as a checked G2 point.
pub fn ppub() -> Result<G2Affine> {
    let x = Fp2::from_hex("Ppub.x", PPUB_X.0, PPUB_X.1)?;
    let y = Fp2::from_hex("Ppub.y", PPUB_Y.0, PPUB_Y.1)?;
    G2Affine::from_coordinates(x, y)
}

/// `g = e(Ppub, P1)` as printed by the standard, `c2.c1.c1` first.
pub const PPUB_PAIRING_HEX: &str = concat!(
    "4E378FB5561CD0668F906B731AC58FEE25738EDF09CADC7A29C0ABC0177AEA6D",
    "28B3404A61908F5D6198815C99AF1990C8AF38655930058C28C21BB539CE0000",
    "38BFFE40A22D529A0C66124B2C308DAC9229912656F62B4FACFCED408E02380F",
    "A01F2C8BEE81769609462C69C96AA923FD863E209D3CE26DD889B55E2E3873DB",
    "67E0E0C2EED7A6993DCE28FE9AA2EF56834307860839677F96685F2B44D0911F",
    "5A1AE172102EFD95DF7338DBC577C66D8D6C15E0A0158C7507228EFB078F42A6",
    "1604A3FCFA9783E667CE9FCB1062C2A5C6685C316DDA62DE0548BAA6BA30038B",
    "93634F44FA13AF76169F3CC8FBEA880ADAFF8475D5FD28A75DEB83C44362B439",
    "B3129A75D31D17194675A1BC56947920898FBF390A5BF5D931CE6CBB3340F66D",
    "4C744E69C4A2E1C8ED72F796D151A17CE2325B943260FC460B9F73CB57C9014B",
    "84B87422330D7936EABA1109FA5A7A7181EE16F2438B0AEB2F38FD5F7554E57A",
    "AAB9F06A4EEBA4323A7833DB202E4E35639D93FA3305AF73F0F071D7D284FCFB",
);
