//! Centralized style constants for consistent theming across the chat components

// Background colors with dark mode support
pub const CONTAINER_BG: &str = "bg-gray-50 dark:bg-gray-900";
pub const CARD_BG: &str = "bg-white dark:bg-gray-800";
pub const AVATAR_BG: &str = "bg-gray-100 dark:bg-gray-700";

// Text colors with dark mode support
pub const PRIMARY_TEXT: &str = "text-gray-900 dark:text-gray-100";

// Border colors with dark mode support
pub const PRIMARY_BORDER: &str = "border-gray-200 dark:border-gray-700";

// Message bubble styles
pub const BUBBLE_BASE: &str = "max-w-[75%] px-4 py-2 rounded-2xl shadow-sm leading-relaxed whitespace-pre-wrap break-words";
pub const USER_BUBBLE_COLORS: &str =
    "bg-blue-500 dark:bg-blue-600 text-white rounded-br-sm border border-blue-600 dark:border-blue-700";
pub const AGENT_BUBBLE_COLORS: &str =
    "bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100 rounded-bl-sm border border-gray-200 dark:border-gray-600";

// Message row layouts: agent rows hug the left edge, user rows the right
pub const AGENT_ROW_LAYOUT: &str = "flex items-end gap-2 justify-start";
pub const USER_ROW_LAYOUT: &str = "flex flex-row-reverse items-end gap-2";
pub const AVATAR: &str =
    "flex items-center justify-center w-8 h-8 rounded-full text-lg select-none flex-shrink-0";

// Input styles
pub const INPUT_COLORS: &str =
    "border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200";
pub const SEND_BUTTON: &str = "w-[42px] h-[42px] p-0 rounded-lg bg-blue-500 dark:bg-blue-600 text-white text-lg cursor-pointer flex-shrink-0 hover:bg-blue-600 dark:hover:bg-blue-700 disabled:bg-gray-200 disabled:cursor-not-allowed disabled:text-gray-400";

// Common layout patterns
pub const FLEX_COL: &str = "flex flex-col";
pub const FLEX_COL_GAP_4: &str = "flex flex-col gap-4";
pub const FLEX_CENTER: &str = "flex items-center";

// Common spacing
pub const STANDARD_PADDING: &str = "p-4";

// Shadows and rounded corners
pub const ROUNDED_STANDARD: &str = "rounded-lg";

// Transitions
pub const TRANSITION_COLORS: &str = "transition-colors duration-200";
pub const TRANSITION_ALL: &str = "transition-all duration-200";

/// Semantic class naming the sender side of a row or bubble
pub const fn sender_class(is_agent: bool) -> &'static str {
    if is_agent { "agent" } else { "user" }
}

pub const fn bubble_colors(is_agent: bool) -> &'static str {
    if is_agent {
        AGENT_BUBBLE_COLORS
    } else {
        USER_BUBBLE_COLORS
    }
}

pub const fn row_layout(is_agent: bool) -> &'static str {
    if is_agent {
        AGENT_ROW_LAYOUT
    } else {
        USER_ROW_LAYOUT
    }
}

// Utility function to combine multiple style constants
pub fn combine_styles(styles: &[&str]) -> String {
    styles.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_branches_do_not_overlap() {
        assert_eq!(sender_class(true), "agent");
        assert_eq!(sender_class(false), "user");
        assert_ne!(bubble_colors(true), bubble_colors(false));
        assert_ne!(row_layout(true), row_layout(false));
    }

    #[test]
    fn test_user_rows_are_reversed() {
        assert!(row_layout(false).contains("flex-row-reverse"));
        assert!(!row_layout(true).contains("flex-row-reverse"));
    }

    #[test]
    fn test_combine_styles_joins_with_spaces() {
        assert_eq!(
            combine_styles(&[FLEX_CENTER, STANDARD_PADDING]),
            "flex items-center p-4"
        );
        assert_eq!(combine_styles(&[]), "");
    }
}
