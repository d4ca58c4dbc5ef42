use std::collections::{BTreeMap, HashMap};

use proptest::prelude::*;
use zlattice::{Addr, DimRange, MAX_COORD, MAX_DIMS};

#[test]
fn map_key_collapse() {
    let a = Addr::new(&[1, 2, 3]).unwrap();
    let b = Addr::new(&[1, 2, 3]).unwrap();

    let mut cells: HashMap<Addr, &str> = HashMap::new();
    cells.insert(a, "first");
    cells.insert(b, "second");
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[&a], "second");
}

#[test]
fn ordered_map_key() {
    let mut cells: BTreeMap<Addr, u32> = BTreeMap::new();
    cells.insert(Addr::new(&[2]).unwrap(), 2);
    cells.insert(Addr::new(&[1]).unwrap(), 1);
    cells.insert(Addr::new(&[1]).unwrap(), 10);
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[&Addr::new(&[1]).unwrap()], 10);
}

#[test]
fn prefix_containment() {
    let prefix = Addr::new(&[1, 2]).unwrap();
    let full = Addr::new(&[1, 2, 3]).unwrap();
    assert!(prefix.contains(full));
    assert!(!full.contains(prefix));
}

#[test]
fn wildcard_range() {
    let addr = Addr::new(&[10, 20, 30]).unwrap();
    let wildcards: Vec<DimRange> = vec![(-1, -1).into(), (-1, -1).into(), (-1, -1).into()];
    assert!(addr.in_range(&wildcards));
}

#[test]
fn transform_leaves_receiver_unchanged() {
    let addr = Addr::new(&[1, 2, 3]).unwrap();
    let _ = addr.with(1, 99).unwrap();
    let _ = addr.append(&[4]).unwrap();
    let _ = addr.slice(1, 2).unwrap();
    assert_eq!(addr.at(1).unwrap(), 2);
    assert_eq!(addr, Addr::new(&[1, 2, 3]).unwrap());
}

#[test]
fn formatting() {
    assert_eq!(Addr::new(&[1, 2, 3]).unwrap().to_string(), "Addr[1 2 3]");
    assert_eq!(Addr::new(&[]).unwrap().to_string(), "Addr[]");
}

#[cfg(feature = "serde")]
#[test]
fn serde_roundtrip() {
    let addr = Addr::new(&[1, 2, 3]).unwrap();
    let json = serde_json::to_string(&addr).unwrap();
    let back: Addr = serde_json::from_str(&json).unwrap();
    assert_eq!(back, addr);

    let range = DimRange::between(3, 7);
    let json = serde_json::to_string(&range).unwrap();
    let back: DimRange = serde_json::from_str(&json).unwrap();
    assert_eq!(back, range);
}

fn coord_seq() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(0u32..=MAX_COORD, 0..=MAX_DIMS)
}

proptest! {
    #[test]
    fn roundtrip(input in coord_seq()) {
        let addr = Addr::new(&input).unwrap();
        let (coords, dims) = addr.coords();
        prop_assert_eq!(dims, input.len());
        prop_assert_eq!(&coords[..dims], input.as_slice());
        // Unused slots stay zeroed.
        prop_assert!(coords[dims..].iter().all(|&v| v == 0));
    }

    #[test]
    fn injectivity(a in coord_seq(), b in coord_seq()) {
        let ea = Addr::new(&a).unwrap();
        let eb = Addr::new(&b).unwrap();
        prop_assert_eq!(ea == eb, a == b);
    }

    #[test]
    fn raw_words_roundtrip(input in coord_seq()) {
        let addr = Addr::new(&input).unwrap();
        prop_assert_eq!(Addr::from_words(addr.as_words()).unwrap(), addr);
    }

    #[test]
    fn prefix_contains_extension(input in coord_seq(), extra in 0u32..=MAX_COORD) {
        let addr = Addr::new(&input).unwrap();
        if let Ok(extended) = addr.append(&[extra]) {
            prop_assert!(addr.contains(extended));
            prop_assert!(!extended.contains(addr));
            prop_assert_eq!(extended.at(input.len()).unwrap(), extra);
        } else {
            prop_assert_eq!(input.len(), MAX_DIMS);
        }
    }

    #[test]
    fn slice_of_full_is_identity(input in coord_seq()) {
        let addr = Addr::new(&input).unwrap();
        prop_assert_eq!(addr.slice(0, input.len()).unwrap(), addr);
    }
}
