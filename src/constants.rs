// Console text for the record manager

/// Shown each time the full menu is presented
pub const WELCOME_BANNER: &str = "Welcome to the Student Management System.";

pub const MENU_PROMPT: &str = "Please select a number from the following options: ";

/// Menu entries in selection order (1-based)
pub const MENU_OPTIONS: [&str; 5] = [
    "Add a student record",
    "Find a student record",
    "Delete a student record",
    "Print all student records",
    "Quit",
];

pub const OPTION_SELECTED: &str = "Option Selected: ";

// Menu selections
pub const SELECT_ADD: i32 = 1;
pub const SELECT_SEARCH: i32 = 2;
pub const SELECT_DELETE: i32 = 3;
pub const SELECT_PRINT: i32 = 4;
pub const SELECT_QUIT: i32 = 5;

// Flow headers
pub const ADD_HEADER: &str = "ADD STUDENT";
pub const SEARCH_HEADER: &str = "STUDENT SEARCH";
pub const DELETE_HEADER: &str = "DELETE STUDENT";
pub const PRINT_HEADER: &str = "PRINT STUDENT RECORDS";

// Field prompts
pub const PROMPT_ID: &str = "Student ID: ";
pub const PROMPT_ENTER_ID: &str = "Please enter a Student ID: ";
pub const PROMPT_FIRST_NAME: &str = "First Name: ";
pub const PROMPT_LAST_NAME: &str = "Last Name: ";
pub const PROMPT_COURSE: &str = "Course enrolled in: ";
pub const PROMPT_GRADE: &str = "Grade for Course: ";

// Outcomes
pub const MSG_ADDED: &str = "Student Added";
pub const MSG_DUPLICATE: &str = "Student already in system.";
pub const MSG_NOT_FOUND: &str = "Student not found.";
pub const MSG_DELETED: &str = "Student deleted.";
pub const MSG_LIST_EMPTY: &str = "Student list is empty.";
pub const MSG_NO_RECORDS: &str = "No records on file.";
pub const MSG_INVALID_INPUT: &str = "Invalid input.";

// Diagnostics
pub const LOG_FILTER_VAR: &str = "ROSTER_LOG";
pub const LOG_FORMAT_VAR: &str = "ROSTER_LOG_FORMAT";
pub const DEFAULT_LOG_FILTER: &str = "off";
