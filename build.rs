// SPDX-License-Identifier: MPL-2.0
//! Build script for platform-specific resources.
//!
//! On Windows, this embeds the version metadata into the executable
//! so it shows up in the file properties dialog.

fn main() {
    println!("cargo:rerun-if-changed=assets/frames");

    // Only run on Windows
    #[cfg(target_os = "windows")]
    {
        let mut res = winresource::WindowsResource::new();
        res.set("FileDescription", "DpFramer profile picture framer");
        res.set("ProductName", "DpFramer");
        res.compile().expect("Failed to compile Windows resources");
    }
}
