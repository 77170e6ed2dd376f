#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleClockify,
    ConfigModuleWorkday,
    ApiKeyMissing(String),       // variable name
    InvalidTimeFormat(String),   // raw value
    InvalidWorkHours(String, String), // start, end
    LocalTimeUnavailable(String),     // local date-time

    // === ACCOUNT MESSAGES ===
    NoWorkspacesFound,
    WorkspaceResolveFailed(String), // error message
    UserResolveFailed(String),      // error message
    UsingWorkspace(String),         // workspace id

    // === PROJECT AND TASK MESSAGES ===
    ProjectsFetchFailed(String), // error message
    TasksFetchFailed(String),    // error message
    NoProjectsFound,
    ProjectSelected(String), // project name
    TaskSelected(String),    // task name
    NoTasksForProject,
    ProceedWithoutTask,
    InvalidSelection(usize), // 1-based choice

    // === DESCRIPTION MESSAGES ===
    DescriptionModeDefault(String), // default description
    DescriptionModeGlobal,
    DescriptionModePerDay,

    // === FILL MESSAGES ===
    FillHeader(String), // month/year
    NoWorkingDays,
    EntryExists(String),              // date
    EntryAdded(String),               // date
    EntryCheckFailed(String, String), // date, error
    EntryCreateFailed(String, String), // date, error
    FillSummary { added: usize, skipped: usize },
    FillFailures(usize),

    // === PROMPTS ===
    PromptSelectModules,
    PromptApiUrl,
    PromptWorkdayStart,
    PromptWorkdayEnd,
    PromptDefaultDescription,
    PromptSelectProject,
    PromptSelectTask,
    PromptDescriptionMode,
    PromptGlobalDescription,
    PromptDayDescription(String), // date
    PromptBillable,
}
