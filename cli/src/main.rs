// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! vcf - read, validate, edit and write vCard 4.0 contact cards

use std::process::ExitCode;

use vcfkit_cli::run;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}
