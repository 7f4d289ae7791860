// src/core/transformer.rs

//! Turns a path relative to the Gradle root project into a `./gradlew` invocation.
//!
//! The rewrite is purely lexical: prefixes and suffixes are trimmed and `/` separators
//! become `:` module separators. Nothing here touches the filesystem.

use crate::{
    constants::{
        GRADLE_COMMAND_PREFIX, GRADLE_TASK_BUILD, GRADLE_TASK_INTEGRATION_TEST, JAVA_EXTENSION,
    },
    models::Options,
};

/// Leading folder of the community edition, which is the root of its own Gradle build.
const COMMUNITY_PREFIX: &str = "community/";
const KOTLIN_SCRIPT_SUFFIX: &str = ".kts";
const BUILD_SCRIPT_SUFFIX: &str = "build.gradle";
const TEST_SOURCE_ROOT: &str = "src/test/java/";

/// What a path addresses once the build-script suffixes are gone.
enum Target<'p> {
    /// A class under `src/test/java/` of `module`.
    TestClass { module: &'p str, class_path: &'p str },
    /// A `.java` file outside the test sources. Kept as is, without a task.
    Untargeted(&'p str),
    /// A project folder.
    Folder(&'p str),
}

fn classify(path: &str) -> Target<'_> {
    let rest = path.strip_prefix(COMMUNITY_PREFIX).unwrap_or(path);
    let rest = rest.strip_suffix(KOTLIN_SCRIPT_SUFFIX).unwrap_or(rest);
    let rest = rest.strip_suffix(BUILD_SCRIPT_SUFFIX).unwrap_or(rest);

    let Some(class_file) = rest.strip_suffix(JAVA_EXTENSION) else {
        return Target::Folder(rest.strip_suffix('/').unwrap_or(rest));
    };
    match class_file.split_once(TEST_SOURCE_ROOT) {
        Some((module, class_path)) => Target::TestClass {
            module: module.strip_suffix('/').unwrap_or(module),
            class_path,
        },
        None => {
            log::debug!("'{}' is not under {}, leaving it as is", class_file, TEST_SOURCE_ROOT);
            Target::Untargeted(class_file)
        }
    }
}

/// Returns the task override from `options`, or `default` when none is set.
fn resolve_task<'a>(options: &'a Options, default: &'a str) -> &'a str {
    options.task_override().unwrap_or(default)
}

/// The Gradle task `transform` puts in the command for `path`, or `None` when the
/// command carries no task at all.
pub fn task_for<'a>(path: &str, options: &'a Options) -> Option<&'a str> {
    match classify(path) {
        Target::TestClass { .. } => Some(resolve_task(options, GRADLE_TASK_INTEGRATION_TEST)),
        Target::Folder(_) => Some(resolve_task(options, GRADLE_TASK_BUILD)),
        Target::Untargeted(_) => None,
    }
}

/// Generates the Gradle command for `path`.
///
/// * `a/b/src/test/java/x/y/MyIT.java` runs the integration tests of module `:a:b`
///   filtered on class `x.y.MyIT`.
/// * `a/b`, `a/b/`, `a/b/build.gradle` and `a/b/build.gradle.kts` build module `:a:b`.
///
/// A `.java` path outside `src/test/java/` keeps its colon-joined form with neither
/// task nor `--tests` clause.
pub fn transform(path: &str, options: &Options) -> String {
    let target = match classify(path) {
        Target::TestClass { module, class_path } => format!(
            "{}:{} --tests \"{}\"",
            module,
            resolve_task(options, GRADLE_TASK_INTEGRATION_TEST),
            class_path.replace('/', ".")
        ),
        Target::Untargeted(class_file) => class_file.to_string(),
        Target::Folder(folder) => {
            format!("{}:{}", folder, resolve_task(options, GRADLE_TASK_BUILD))
        }
    };

    format!("{}{}", GRADLE_COMMAND_PREFIX, target.replace('/', ":"))
}
