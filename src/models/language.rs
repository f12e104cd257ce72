use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Js,
    Ts,
    Py,
    Rs,
    Java,
    Go,
    Cpp,
    C,
    Kt,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Js => "JavaScript",
            Language::Ts => "TypeScript",
            Language::Py => "Python",
            Language::Rs => "Rust",
            Language::Java => "Java",
            Language::Go => "Go",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::Kt => "Kotlin",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Language::Js => "js",
            Language::Ts => "ts",
            Language::Py => "py",
            Language::Rs => "rs",
            Language::Java => "java",
            Language::Go => "go",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::Kt => "kt",
        }
    }

    /// Example command shown in the README for running a single solution
    pub fn run_command(&self) -> &'static str {
        match self {
            Language::Js => "node solutions/XXXX-problem-name.js",
            Language::Ts => "npx ts-node solutions/XXXX-problem-name.ts",
            Language::Py => "python3 solutions/XXXX-problem-name.py",
            Language::Rs => "rustc solutions/XXXX-problem-name.rs && ./XXXX-problem-name",
            Language::Java => "java solutions/XXXX-problem-name.java",
            Language::Go => "go run solutions/XXXX-problem-name.go",
            Language::Cpp => "g++ solutions/XXXX-problem-name.cpp && ./a.out",
            Language::C => "gcc solutions/XXXX-problem-name.c && ./a.out",
            Language::Kt => "kotlinc solutions/XXXX-problem-name.kt -include-runtime -d solution.jar",
        }
    }
}
