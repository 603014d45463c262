/// Returns the placeholder name for the input at `index`.
///
/// Names run `A` to `Z`, then `AA`, `AB`, and so on.
pub fn placeholder(mut index: usize) -> String {
	let mut letters = Vec::new();
	loop {
		letters.push(b'A' + (index % 26) as u8);
		if index < 26 {
			break;
		}
		index = index / 26 - 1;
	}
	letters.iter().rev().map(|&b| char::from(b)).collect()
}

/// Returns placeholder names for `count` inputs.
pub fn placeholders(count: usize) -> Vec<String> {
	(0..count).map(placeholder).collect()
}
