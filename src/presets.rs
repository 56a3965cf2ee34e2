//! The shipped collateral breakdown tables.
//!
//! Shares do not sum to 100 and the aggregate sub-table is not reconciled
//! against its parent slice; both match the product tables as shipped and
//! the projection layer deliberately performs no validation.

use crate::core::{CategoryRecord, HexColor, SubCategory};

/// Portfolio total backing the breakdown, in USD.
pub const COLLATERAL_TOTAL_USD: f64 = 212_423.43;

/// The five top-level collections, in display order.
#[must_use]
pub fn collateral_categories() -> Vec<CategoryRecord> {
    vec![
        CategoryRecord::new("Cryptopunks", 36.0, HexColor::from("#CB2B83"), 12).with_image(
            "https://lh3.googleusercontent.com/jcn6v1K0DZvF4IAFohPcOvvKWGc4U2FH21VKYkO6eoXLML2TrW9eHO05t0qe_o91JamX3iBymbus8eDkgdyXMoom=s250",
        ),
        CategoryRecord::new("Bored Ape Yacht Club", 22.0, HexColor::from("#FF5630"), 8)
            .with_image(
                "https://lh3.googleusercontent.com/w3dmFHFr0F33spfG8O6xOFwtJgs4uhFvha2UT_mNJC1HjAFdE9uzONOK9Lpj7wcub7oZ_Ojg9A1-auoJLOVx5GmxJzJEnVj4hkO_Xg=s250",
            ),
        CategoryRecord::new("Pudgy Penguins", 19.0, HexColor::from("#FFAB00"), 5).with_image(
            "https://lh3.googleusercontent.com/bcCd1TfusKK6wWjmshwmizmY9j7An3pp9kxopMxfIt-_I8WFnSIK-5gevOduoYK4Qpq2e3DyXgROKNfkP396W5ViEYXhxoyAZG3s_vY=s120",
        ),
        CategoryRecord::new("Creepz", 15.0, HexColor::from("#8E33FF"), 4).with_image(
            "https://i.seadn.io/gcs/files/13f3b6e7226f54d739ad8c3ed838802b.png?w=500&auto=format",
        ),
        CategoryRecord::new("Other", 11.0, HexColor::from("#00B8D9"), 3),
    ]
}

/// Collections aggregated under the "Other" slice.
#[must_use]
pub fn collateral_other_breakdown() -> Vec<SubCategory> {
    vec![
        SubCategory::new("Milady", 1.0, 5).with_image(
            "https://i.seadn.io/gae/a_frplnavZA9g4vN3SexO5rrtaBX_cBTaJYcgrPtwQIqPhzgzUendQxiwUdr51CGPE2QyPEa1DHnkW1wLrHAv5DgfC3BP-CWpFq6BA?w=500&auto=format",
        ),
        SubCategory::new("World of Women", 4.7, 2).with_image(
            "https://lh3.googleusercontent.com/I68L-_MThK4yUXXnUGnNJQBuAtu5w66mg-57ZzKOYDDVI6Y4-XbdMt3SbuVaEymUkoIgv9BdrNa1cbQPPaJKRgaEM9JqpywS-rW4KQ=s120",
        ),
        SubCategory::new("CyberBrokers", 5.3, 1).with_image(
            "https://lh3.googleusercontent.com/Qd1IEPYz_0YlMaclPwb6_9PyP7afZIzH15IdIU2X6t1Wvg81DwpAaWOY0cNmxy173C4yMA7sM3xF9-HJsCSKJdx6KvDR3old3IKuTIc=s120",
        ),
    ]
}
