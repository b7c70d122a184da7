//! Dependency declarations for each supported build tool.
//!
//! Every renderer is a fixed template. Group, id and version are
//! interpolated verbatim with no escaping, so values containing quotes or
//! angle brackets can produce output the target tool will reject.

use crate::model::{Artifact, Version};
use serde::Deserialize;
use std::fmt;

/// Build tools a declaration can be rendered for, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Maven,
    Gradle,
    Sbt,
    Ivy,
    Grape,
    Leiningen,
    Buildr,
}

impl BuildTool {
    pub const ALL: [BuildTool; 7] = [
        BuildTool::Maven,
        BuildTool::Gradle,
        BuildTool::Sbt,
        BuildTool::Ivy,
        BuildTool::Grape,
        BuildTool::Leiningen,
        BuildTool::Buildr,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuildTool::Maven => "maven",
            BuildTool::Gradle => "gradle",
            BuildTool::Sbt => "sbt",
            BuildTool::Ivy => "ivy",
            BuildTool::Grape => "grape",
            BuildTool::Leiningen => "leiningen",
            BuildTool::Buildr => "buildr",
        }
    }

    /// Project homepage of the tool.
    pub fn homepage(self) -> &'static str {
        match self {
            BuildTool::Maven => "https://maven.apache.org",
            BuildTool::Gradle => "https://gradle.org",
            BuildTool::Sbt => "https://www.scala-sbt.org",
            BuildTool::Ivy => "https://ant.apache.org/ivy/",
            BuildTool::Grape => "https://docs.groovy-lang.org/latest/html/documentation/grape.html",
            BuildTool::Leiningen => "https://leiningen.org",
            BuildTool::Buildr => "https://buildr.apache.org",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(name))
    }

    pub fn render(self, artifact: &Artifact, version: &Version) -> String {
        let render: fn(&Artifact, &Version) -> String = match self {
            BuildTool::Maven => maven,
            BuildTool::Gradle => gradle,
            BuildTool::Sbt => sbt,
            BuildTool::Ivy => ivy,
            BuildTool::Grape => grape,
            BuildTool::Leiningen => leiningen,
            BuildTool::Buildr => buildr,
        };
        render(artifact, version)
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One declaration per tool, in [`BuildTool::ALL`] order.
pub fn render_all(artifact: &Artifact, version: &Version) -> Vec<(BuildTool, String)> {
    BuildTool::ALL
        .into_iter()
        .map(|tool| (tool, tool.render(artifact, version)))
        .collect()
}

pub fn maven(artifact: &Artifact, version: &Version) -> String {
    format!(
        "<dependency>\n    <groupId>{}</groupId>\n    <artifactId>{}</artifactId>\n    <version>{}</version>\n</dependency>",
        artifact.group, artifact.id, version.value
    )
}

pub fn gradle(artifact: &Artifact, version: &Version) -> String {
    format!(
        r#"implementation("{}:{}:{}")"#,
        artifact.group, artifact.id, version.value
    )
}

pub fn sbt(artifact: &Artifact, version: &Version) -> String {
    format!(
        r#"libraryDependencies += "{}" % "{}" % "{}""#,
        artifact.group, artifact.id, version.value
    )
}

pub fn ivy(artifact: &Artifact, version: &Version) -> String {
    format!(
        r#"<dependency org="{}" name="{}" rev="{}"/>"#,
        artifact.group, artifact.id, version.value
    )
}

pub fn grape(artifact: &Artifact, version: &Version) -> String {
    format!(
        "@Grapes(\n    @Grab(group='{}', module='{}', version='{}')\n)",
        artifact.group, artifact.id, version.value
    )
}

pub fn leiningen(artifact: &Artifact, version: &Version) -> String {
    format!(
        r#"[{}/{} "{}"]"#,
        artifact.group, artifact.id, version.value
    )
}

pub fn buildr(artifact: &Artifact, version: &Version) -> String {
    format!("'{}:{}:jar:{}'", artifact.group, artifact.id, version.value)
}
