// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;

use logforth_dated_file::DatedFile;
use logforth_dated_file::LogWriter;
use logforth_dated_file::writer::Stderr;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all("logs")?;

    let writers: Vec<Box<dyn LogWriter>> = vec![
        DatedFile::builder("logs")
            .rollover_daily()
            .filename_suffix("-access")
            .build()?
            .into(),
        Stderr::default().into(),
    ];

    for writer in &writers {
        writer.write("GET /index.html 200")?;
        writer.write("GET /missing 404")?;
    }

    Ok(())
}
