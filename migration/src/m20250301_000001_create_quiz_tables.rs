use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建测验表
        manager
            .create_table(
                Table::create()
                    .table(Quizzes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Quizzes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Quizzes::Title).string().not_null())
                    .col(ColumnDef::new(Quizzes::Topic).string().null())
                    .col(ColumnDef::new(Quizzes::Source).string().not_null())
                    // 题目以 JSON 数组存储，顺序即评分顺序
                    .col(ColumnDef::new(Quizzes::Questions).text().not_null())
                    .col(ColumnDef::new(Quizzes::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建成绩表
        // quiz_id 可为空：内联测验的成绩只记录标题
        manager
            .create_table(
                Table::create()
                    .table(QuizResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuizResults::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(QuizResults::StudentId).string().not_null())
                    .col(ColumnDef::new(QuizResults::QuizId).big_integer().null())
                    .col(ColumnDef::new(QuizResults::QuizTitle).string().not_null())
                    .col(ColumnDef::new(QuizResults::Score).integer().not_null())
                    .col(ColumnDef::new(QuizResults::Total).integer().not_null())
                    .col(
                        ColumnDef::new(QuizResults::FeedbackMessage)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuizResults::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuizResults::Table, QuizResults::QuizId)
                            .to(Quizzes::Table, Quizzes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_quizzes_created_at")
                    .table(Quizzes::Table)
                    .col(Quizzes::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_quiz_results_student_id")
                    .table(QuizResults::Table)
                    .col(QuizResults::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_quiz_results_quiz_id")
                    .table(QuizResults::Table)
                    .col(QuizResults::QuizId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(QuizResults::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Quizzes::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Quizzes {
    #[sea_orm(iden = "quizzes")]
    Table,
    Id,
    Title,
    Topic,
    Source,
    Questions,
    CreatedAt,
}

#[derive(DeriveIden)]
enum QuizResults {
    #[sea_orm(iden = "quiz_results")]
    Table,
    Id,
    StudentId,
    QuizId,
    QuizTitle,
    Score,
    Total,
    FeedbackMessage,
    CreatedAt,
}
