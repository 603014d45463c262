use pretty_assertions::assert_eq;
use setcalc_registry::{Capacity, OperationRegistry};

use super::*;

struct Transcript {
	output: String,
	capacity: Option<Capacity>,
	running: bool,
}

fn run_with(input: &str, registry: &mut OperationRegistry, options: SessionOptions) -> Transcript {
	let mut output = Vec::new();
	let (capacity, running) = {
		let mut console = Console::new(input.as_bytes(), &mut output);
		let mut session = Session::new(&mut console, registry).with_options(options);
		session.run().unwrap();
		(session.capacity(), session.is_running())
	};
	Transcript {
		output: String::from_utf8(output).unwrap(),
		capacity,
		running,
	}
}

fn run(input: &str, registry: &mut OperationRegistry) -> Transcript {
	run_with(input, registry, SessionOptions { show_listing: false })
}

fn descriptions(registry: &OperationRegistry) -> Vec<String> {
	registry.iter().map(|id| registry.describe(id)).collect()
}

#[test]
fn negotiation_retries_until_valid() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run("3\n100\nabc\n5\nexit\n", &mut registry);
	assert_eq!(t.capacity.map(Capacity::get), Some(5));
	assert_eq!(t.output.matches("Enter the maximum number of operations (4-99):").count(), 4);
	assert!(t.output.contains("got 3"));
	assert!(t.output.contains("got 100"));
	assert!(t.output.contains("error: expected a number, found `abc`"));
	assert!(!t.running);
}

#[test]
fn union_appends_new_entry() {
	let mut registry = OperationRegistry::with_defaults();
	run("5\nuni 0 1\nexit\n", &mut registry);
	assert_eq!(registry.len(), 4);
	assert_eq!(descriptions(&registry)[3], "(A ∪ B) ∪ (C ∩ D)");
}

#[test]
fn over_capacity_rolls_back() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run("4\nuni 0 1\nprod 0 2\ncomp 1 1\nexit\n", &mut registry);
	assert_eq!(registry.len(), 4);
	assert_eq!(t.output.matches("Number of maximum operations: 4").count(), 2);
	assert!(t.output.contains("reached the maximum of 4 operations"));
	assert_eq!(descriptions(&registry)[3], "(A ∪ B) ∪ (C ∩ D)");
}

#[test]
fn eval_reads_one_set_per_input() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run("5\neval 0 2 1 2 1 5\nexit\n", &mut registry);
	assert!(t.output.contains("{1, 2} ∪ {5} = {1, 2, 5}\n"));
}

#[test]
fn eval_sets_may_span_lines() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run("5\neval 2\n3 1 2 3\n1 2\nexit\n", &mut registry);
	assert!(t.output.contains("{1, 2, 3} - {2} = {1, 3}\n"));
}

#[test]
fn eval_composition() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run("5\ncomp 0 1\neval 3 1 1 1 2 2 2 3\nexit\n", &mut registry);
	assert!(t.output.contains("({1} ∪ {2}) ∩ {2, 3} = {2}\n"));
}

#[test]
fn delete_shifts_indices() {
	let mut registry = OperationRegistry::with_defaults();
	run("5\nuni 0 2\ndel 0\nexit\n", &mut registry);
	assert_eq!(descriptions(&registry), ["A ∩ B", "A - B", "(A ∪ B) ∪ (C - D)"]);
}

#[test]
fn missing_operation_reports_index() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run("5\nuni 0 7\ndel -1\nexit\n", &mut registry);
	assert!(t.output.contains("error: operation 7 doesn't exist"));
	assert!(t.output.contains("error: operation -1 doesn't exist"));
	assert_eq!(registry.len(), 3);
}

#[test]
fn unknown_command_discards_rest_of_line() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run("5\nfoo 1 2\nexit\n", &mut registry);
	assert!(t.output.contains("error: command not found: foo"));
	assert_eq!(t.output.matches("error:").count(), 1);
}

#[test]
fn help_lists_table_in_order() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run("5\nhelp\nexit\n", &mut registry);
	let listed: Vec<&str> = t
		.output
		.lines()
		.filter_map(|line| line.strip_prefix("* "))
		.filter_map(|line| line.split_whitespace().next())
		.collect();
	let expected: Vec<&str> = CommandTable::builtin().iter().map(|d| d.name).collect();
	assert_eq!(listed, expected);
}

#[test]
fn missing_file_is_reported() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run("5\nread /definitely/not/here.txt\nexit\n", &mut registry);
	assert!(t.output.contains("error: cannot open /definitely/not/here.txt"));
	assert!(!t.output.contains("error in line"));
	assert!(t.output.contains("Goodbye!"));
}

#[test]
fn resize_shrink_accepted_truncates() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run("5\nuni 0 1\nuni 0 1\nresize 4\ny\nexit\n", &mut registry);
	assert!(t.output.contains("proceed? (y/n)"));
	assert_eq!(registry.len(), 4);
	assert_eq!(t.capacity.map(Capacity::get), Some(4));
}

#[test]
fn resize_shrink_declined_keeps_previous_minus_one() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run("6\nuni 0 1\nuni 0 1\nuni 0 1\nresize 4\nn\nexit\n", &mut registry);
	// Capacity drops to 5 while six operations exist, so the post-command
	// check removes the newest one.
	assert_eq!(t.capacity.map(Capacity::get), Some(5));
	assert_eq!(registry.len(), 5);
	assert!(t.output.contains("Number of maximum operations: 5"));
}

#[test]
fn resize_grow_needs_no_confirmation() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run("5\nresize 50\nexit\n", &mut registry);
	assert!(!t.output.contains("proceed?"));
	assert_eq!(t.capacity.map(Capacity::get), Some(50));
}

#[test]
fn rejected_resize_renegotiates() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run("5\nresize 200\n7\nexit\n", &mut registry);
	assert!(t.output.contains("got 200"));
	assert_eq!(t.output.matches("Enter the maximum number of operations").count(), 3);
	assert_eq!(t.capacity.map(Capacity::get), Some(7));
}

#[test]
fn end_of_input_stops_session() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run("5\nuni 0 1\n", &mut registry);
	assert!(!t.running);
	assert!(!t.output.contains("Goodbye!"));
	assert_eq!(registry.len(), 4);
}

#[test]
fn listing_printed_before_prompt() {
	let mut registry = OperationRegistry::with_defaults();
	let t = run_with("5\nexit\n", &mut registry, SessionOptions::default());
	let expected = "Enter the maximum number of operations (4-99):\n\
		\n\
		List of available set operations:\n\
		0.\tA ∪ B\n\
		1.\tA ∩ B\n\
		2.\tA - B\n\
		\n\
		Enter command ('help' for the list of available commands): Goodbye!\n";
	assert_eq!(t.output, expected);
}

#[test]
fn exit_from_root_does_not_need_stop_token() {
	let mut registry = OperationRegistry::new();
	let mut output = Vec::new();
	let mut console = Console::new("5\nexit\n".as_bytes(), &mut output);
	let mut session = Session::new(&mut console, &mut registry);
	session.run().unwrap();
	assert!(!session.is_running());
	assert!(!session.stop_token().is_stop_requested());
	assert!(session.script_path().is_none());
}

#[test]
fn oversized_combinator_is_refused() {
	let mut registry = OperationRegistry::with_defaults();
	let mut input = String::from("99\nuni 0 0\n");
	for index in 3..=11 {
		input.push_str(&format!("uni {index} {index}\n"));
	}
	input.push_str("exit\n");

	let t = run(&input, &mut registry);
	assert_eq!(registry.len(), 12);
	assert_eq!(registry.arity(registry.resolve(11).unwrap()), 1024);
	assert_eq!(t.output.matches("error:").count(), 1);
	assert!(t.output.contains("error: operation would take more than 1024 input sets"));
	assert!(t.output.ends_with("Goodbye!\n"));
}
