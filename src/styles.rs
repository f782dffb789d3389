/// Shared Tailwind class constants.
pub mod styles {
    // Layout
    pub const SPACE_Y_2: &str = "space-y-2";
    pub const SPACE_Y_3: &str = "space-y-3";
    pub const SPACE_Y_4: &str = "space-y-4";
    pub const SPACE_Y_6: &str = "space-y-6";
    pub const GRID_COLS_2: &str = "grid grid-cols-1 lg:grid-cols-2";
    pub const GRID_COLS_4: &str = "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4";
    pub const GAP_6: &str = "gap-6";

    // Text
    pub const TEXT_SM: &str = "text-sm";
    pub const TEXT_XS: &str = "text-xs";
    pub const FONT_MEDIUM: &str = "font-medium";
    pub const TEXT_GRAY_500: &str = "text-gray-500";
    pub const TEXT_GRAY_600: &str = "text-gray-600";
    pub const TEXT_GRAY_700: &str = "text-gray-700";
    pub const TEXT_GRAY_900: &str = "text-gray-900";
}

/// Recurring combinations.
pub mod combinations {
    pub const CARD: &str = "bg-white rounded-lg shadow-sm border border-gray-200";
    pub const CARD_HOVER: &str =
        "bg-white rounded-lg shadow-sm border border-gray-200 hover:shadow-md transition-shadow";

    pub const BUTTON_PRIMARY: &str =
        "px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors font-medium disabled:opacity-50";
    pub const BUTTON_SECONDARY: &str =
        "px-4 py-2 border border-gray-300 text-gray-700 rounded-md hover:bg-gray-50 transition-colors";

    pub const INPUT: &str =
        "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500";
    pub const LABEL: &str = "block text-sm font-medium text-gray-700 mb-1";

    pub const PAGE_TITLE: &str = "text-2xl font-bold text-gray-900";
    pub const PAGE_SUBTITLE: &str = "text-gray-600";
    pub const SECTION_TITLE: &str = "text-lg font-semibold text-gray-900";

    pub const LOADING: &str = "text-center py-8 text-gray-500";
    pub const ERROR: &str = "text-red-500 p-4 bg-red-50 border border-red-200 rounded";
    pub const EMPTY: &str = "text-center py-8 text-gray-500";

    pub const TAG: &str = "px-2 py-1 bg-blue-100 text-blue-800 text-xs rounded-full";
    pub const LIST_ROW: &str =
        "flex items-center justify-between py-2 border-b border-gray-100 last:border-b-0";
}
