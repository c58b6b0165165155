//! Sample option lists.

use droplist::SelectOption;

pub fn colors() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Red", "red"),
        SelectOption::new("Blue", "blue"),
        SelectOption::new("Green", "green"),
        SelectOption::new("Orange", "orange"),
        SelectOption::new("Really really long label", "long-label"),
    ]
}

/// `count` options labelled "Option 1" through "Option {count}".
pub fn generated(count: usize) -> Vec<SelectOption> {
    (1..=count)
        .map(|i| SelectOption::new(format!("Option {i}"), format!("option{i}")))
        .collect()
}
