use crate::utils::Project;
use shipflow_build::Recipe;
use shipflow_core::RecipeMode;

/// recipeコマンドを処理
///
/// stdoutにはレシピ本文だけを出力する
pub async fn handle(project: &Project) -> anyhow::Result<()> {
    let pipeline = &project.pipeline;
    let recipe = match pipeline.recipe.mode {
        RecipeMode::Generate => Recipe::render(&pipeline.recipe)?,
        RecipeMode::Provided => {
            Recipe::read_from(&project.root.join(pipeline.recipe_path())).await?
        }
    };

    print!("{}", recipe.content());
    Ok(())
}
