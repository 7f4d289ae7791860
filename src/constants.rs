// src/constants.rs

/// The name of the configuration file, looked up in the working directory first.
pub const CONFIG_FILENAME: &str = "config.toml";

/// The name of the fallback configuration directory inside the user's home (`~/.grad`).
pub const GRAD_DIR: &str = ".grad";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "GRAD_CONFIG";

/// Gradle task used for a Java test class when no task override is given.
pub const GRADLE_TASK_INTEGRATION_TEST: &str = "integrationTest";

/// Gradle task used for a project folder when no task override is given.
pub const GRADLE_TASK_BUILD: &str = "build";

/// Every generated command starts with this. The trailing `:` addresses the root project.
pub const GRADLE_COMMAND_PREFIX: &str = "./gradlew -PcreateTestReports :";

/// Extension appended to a bare class name when searching for its source file.
pub const JAVA_EXTENSION: &str = ".java";
