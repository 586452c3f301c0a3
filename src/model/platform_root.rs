//! The platform root.

camp_resource! {
    /// Entry point of the platform. Its document links to every registered resource.
    PlatformRootSummary = "Platform" {}
}
