pub mod cli_consts {
    //! Showcase Configuration Constants
    //!
    //! Fixed literals of the demo pages and defaults of the terminal host,
    //! organized by functional area.

    // =============================================================================
    // ACTIVITY LOG
    // =============================================================================

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 50;

    // =============================================================================
    // PAGE
    // =============================================================================

    pub const PAGE_TITLE: &str = "📚 Streamlit API Showcase";

    pub const NAV_HEADER: &str = "Navigate";

    pub const NAV_LABEL: &str = "Sections";

    pub const NAV_INFO: &str = "Explore different Streamlit API features!";

    // =============================================================================
    // SAMPLE DATA
    // =============================================================================

    /// Sample table shape for the chart demos.
    pub mod charts {
        pub const ROWS: usize = 50;
        pub const COLUMNS: [&str; 3] = ["A", "B", "C"];
    }

    /// Sample table shape for the dataframe demos.
    pub mod dataframes {
        pub const ROWS: usize = 10;
        pub const COLUMNS: [&str; 5] = ["A", "B", "C", "D", "E"];
        /// Rows kept by the static table view.
        pub const TABLE_HEAD_ROWS: usize = 5;
    }

    // =============================================================================
    // MEDIA
    // =============================================================================

    pub mod media {
        pub const IMAGE_URL: &str = "https://via.placeholder.com/400";
        pub const IMAGE_CAPTION: &str = "Sample Image";
        pub const AUDIO_URL: &str = "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3";
        pub const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
    }

    // =============================================================================
    // UTILITIES
    // =============================================================================

    /// Number of unit steps of the progress demo.
    pub const PROGRESS_STEPS: u8 = 100;

    /// Pause before each progress step (milliseconds).
    pub const DEFAULT_PROGRESS_STEP_MS: u64 = 10;

    /// How long the balloon animation stays on screen (milliseconds).
    pub const DEFAULT_CELEBRATION_MS: u64 = 2500;

    pub const CODE_SNIPPET: &str = "import streamlit as st\nst.write('Hello, world!')";

    pub const CODE_LANGUAGE: &str = "python";

    // =============================================================================
    // TERMINAL HOST
    // =============================================================================

    /// Splash screen duration before the showcase opens (milliseconds).
    pub const SPLASH_MS: u64 = 1000;

    /// Redraw interval while the balloon animation runs (milliseconds).
    pub const CELEBRATION_FRAME_MS: u64 = 40;

    /// Event poll timeout when nothing is animating (milliseconds).
    pub const IDLE_POLL_MS: u64 = 100;
}
