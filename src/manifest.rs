use std::path::Path;

use anyhow::Context;
use anyhow::Result;

/// Files of the Blazy web application, in upload order.
pub const BLAZY_FILES: &[&str] = &[
    "Blazy.sln",
    "README.md",
    "todo.md",
    "Blazy.Core/Blazy.Core.csproj",
    "Blazy.Core/DTOs/CommentDto.cs",
    "Blazy.Core/DTOs/CreateCommentDto.cs",
    "Blazy.Core/DTOs/CreatePostDto.cs",
    "Blazy.Core/DTOs/LoginDto.cs",
    "Blazy.Core/DTOs/PostDto.cs",
    "Blazy.Core/DTOs/RegisterDto.cs",
    "Blazy.Core/DTOs/UserDto.cs",
    "Blazy.Core/Entities/Comment.cs",
    "Blazy.Core/Entities/Dislike.cs",
    "Blazy.Core/Entities/Like.cs",
    "Blazy.Core/Entities/Post.cs",
    "Blazy.Core/Entities/PostTag.cs",
    "Blazy.Core/Entities/Subscription.cs",
    "Blazy.Core/Entities/Tag.cs",
    "Blazy.Core/Entities/User.cs",
    "Blazy.Core/Entities/UserTag.cs",
    "Blazy.Data/Blazy.Data.csproj",
    "Blazy.Data/BlazyDbContext.cs",
    "Blazy.Data/DataInitializer.cs",
    "Blazy.Repository/Blazy.Repository.csproj",
    "Blazy.Repository/Interfaces/IPostRepository.cs",
    "Blazy.Repository/Interfaces/IRepository.cs",
    "Blazy.Repository/Interfaces/IUserRepository.cs",
    "Blazy.Repository/Repositories/PostRepository.cs",
    "Blazy.Repository/Repositories/Repository.cs",
    "Blazy.Repository/Repositories/UserRepository.cs",
    "Blazy.Services/Blazy.Services.csproj",
    "Blazy.Services/Interfaces/ICommentService.cs",
    "Blazy.Services/Interfaces/IPostService.cs",
    "Blazy.Services/Interfaces/IUserService.cs",
    "Blazy.Services/Services/CommentService.cs",
    "Blazy.Services/Services/PostService.cs",
    "Blazy.Services/Services/UserService.cs",
    "Blazy.Tests/Blazy.Tests.csproj",
    "Blazy.Tests/Services/UserServiceTests.cs",
    "Blazy.Web/Blazy.Web.csproj",
    "Blazy.Web/Controllers/AccountController.cs",
    "Blazy.Web/Controllers/BlogController.cs",
    "Blazy.Web/Controllers/HomeController.cs",
    "Blazy.Web/Controllers/PostController.cs",
    "Blazy.Web/Program.cs",
    "Blazy.Web/Views/Account/Edit.cshtml",
    "Blazy.Web/Views/Account/Login.cshtml",
    "Blazy.Web/Views/Account/Profile.cshtml",
    "Blazy.Web/Views/Account/Register.cshtml",
    "Blazy.Web/Views/Blog/Index.cshtml",
    "Blazy.Web/Views/Home/About.cshtml",
    "Blazy.Web/Views/Home/Index.cshtml",
    "Blazy.Web/Views/Post/Create.cshtml",
    "Blazy.Web/Views/Post/Index.cshtml",
    "Blazy.Web/Views/Shared/_Layout.cshtml",
    "Blazy.Web/Views/_ViewImports.cshtml",
    "Blazy.Web/Views/_ViewStart.cshtml",
    "Blazy.Web/appsettings.json",
    "Blazy.Web/wwwroot/css/site.css",
];

/// The built-in file list.
pub fn builtin() -> Vec<String> {
    BLAZY_FILES.iter().map(|s| s.to_string()).collect()
}

/// Parse a manifest: one path per line, blank lines and `#` comments ignored.
///
/// Each line is trimmed, so a path cannot begin or end with whitespace.
pub fn parse(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect()
}

/// Load a manifest file from disk.
pub async fn load(path: &Path) -> Result<Vec<String>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    let files = parse(&text);
    tracing::debug!(manifest = %path.display(), count = files.len(), "Loaded manifest");
    Ok(files)
}
