use proptest::prelude::*;

use super::*;

fn read(input: &str) -> Result<Set, ReadError> {
	Set::read(&mut Tokens::new(input.as_bytes()))
}

#[test]
fn reads_count_prefixed_elements() {
	let set = read("3 5 1 5 9").unwrap();
	assert_eq!(set, Set::from([1, 5]));
	assert_eq!(set.to_string(), "{1, 5}");
}

#[test]
fn leaves_trailing_tokens_in_stream() {
	let mut tokens = Tokens::new("2 1 2 1 5".as_bytes());
	assert_eq!(Set::read(&mut tokens).unwrap(), Set::from([1, 2]));
	assert_eq!(Set::read(&mut tokens).unwrap(), Set::from([5]));
}

#[test]
fn empty_set() {
	let set = read("0").unwrap();
	assert!(set.is_empty());
	assert_eq!(set.to_string(), "{}");
}

#[test]
fn negative_count_is_malformed() {
	assert!(matches!(read("-1 4"), Err(ReadError::Malformed(tok)) if tok == "-1"));
}

#[test]
fn element_outside_i32_is_malformed() {
	assert!(matches!(read("1 4294967296"), Err(ReadError::Malformed(tok)) if tok == "4294967296"));
}

#[test]
fn short_input_is_eof() {
	assert!(matches!(read("3 1 2"), Err(ReadError::Eof)));
}

#[test]
fn algebra() {
	let a = Set::from([1, 2, 3]);
	let b = Set::from([2, 3, 4]);
	assert_eq!(a.union(&b), Set::from([1, 2, 3, 4]));
	assert_eq!(a.intersection(&b), Set::from([2, 3]));
	assert_eq!(a.difference(&b), Set::from([1]));
	assert_eq!(Set::from([1, 2]).product(&Set::from([3, 5])), Set::from([3, 5, 6, 10]));
}

#[test]
fn product_saturates() {
	let big = Set::from([i32::MAX]);
	assert_eq!(big.product(&Set::from([2])), Set::from([i32::MAX]));
}

fn small_set() -> impl Strategy<Value = Set> {
	proptest::collection::vec(-50i32..50, 0..12).prop_map(Set::from_iter)
}

proptest! {
	#[test]
	fn union_contains_both(a in small_set(), b in small_set()) {
		let u = a.union(&b);
		prop_assert!(a.iter().chain(b.iter()).all(|x| u.contains(x)));
		prop_assert!(u.len() <= a.len() + b.len());
	}

	#[test]
	fn difference_and_intersection_partition(a in small_set(), b in small_set()) {
		let inter = a.intersection(&b);
		let diff = a.difference(&b);
		prop_assert!(inter.intersection(&diff).is_empty());
		prop_assert_eq!(inter.union(&diff), a);
	}

	#[test]
	fn display_is_sorted(a in small_set()) {
		let rendered = a.to_string();
		let inner = rendered.trim_start_matches('{').trim_end_matches('}');
		let parsed: Vec<i32> = if inner.is_empty() {
			Vec::new()
		} else {
			inner.split(", ").map(|x| x.parse().unwrap()).collect()
		};
		prop_assert!(parsed.windows(2).all(|w| w[0] < w[1]));
		prop_assert_eq!(parsed.len(), a.len());
	}
}
