use crate::libs::todo::TodoId;

#[derive(Debug, Clone)]
pub enum Message {
    // === TODO MESSAGES ===
    TodoCreated(TodoId, String), // id, title
    TodoUpdated(TodoId),
    TodoDeleted(TodoId),
    TodoMarkedDone(TodoId),
    TodoMarkedUndone(TodoId),
    TodoNotFound(TodoId),
    TodoNotLoaded(TodoId),
    TodosLoaded(usize),
    NoTodos,
    ConfirmDeleteTodo(String), // todo label
    InvalidTodo(String),       // reason

    // === CATEGORY MESSAGES ===
    CategoryHeader {
        category: String,
        shown: usize,
        total: usize,
    },
    CategoryCollapsed {
        category: String,
        total: usize,
    },
    CategoryEmpty,
    CategoryNotFound(String),
    HiddenCompleted(usize),
    CategoryExpandToggled(String, bool),
    CategoryShowCompletedToggled(String, bool),
    DetailsToggled(TodoId, bool),

    // === BOARD MESSAGES ===
    BoardHeader,
    BoardActionToggleExpand,
    BoardActionToggleCompleted,
    BoardActionToggleDetails,
    BoardActionMarkDone,
    BoardActionMarkUndone,
    BoardActionCreate,
    BoardActionEdit,
    BoardActionDelete,
    BoardActionReload,
    BoardActionQuit,
    NewCategoryOption,

    // === SERVICE MESSAGES ===
    LoadFailed(String),    // error
    RequestFailed(String), // error
    SignInRequired(String), // location
    ApiNotConfigured,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleApi,
    ConfigModuleDisplay,

    // === PROMPTS ===
    PromptTodoTitle,
    PromptTodoDescription,
    PromptTodoCategory,
    PromptNewCategory,
    PromptSelectCategory,
    PromptSelectTodo,
    PromptSelectAction,
    PromptApiUrl,
    PromptApiTimeout,
    PromptDateFormat,
    PromptShowDescriptions,
    PromptSelectModules,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
