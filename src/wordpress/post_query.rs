use super::{Db, WordPressPost};

/// Trait 用于查询 WordPress 文章
pub trait PostQuery {
    /// 获取 [`Db`] 对象
    fn db(&self) -> &Db;

    /// 表名前缀，例如 `wp_`
    fn table_prefix(&self) -> &str;

    /// 查询所有已发布文章的最新修订
    ///
    /// 规则：
    ///
    /// - 父文章为顶层（`post_parent = 0`）且状态为 `publish`
    /// - 在父文章的 `post`/`revision` 子记录中取 id 最大的一条
    /// - 作者取 `display_name`，分类和标签取自父文章并用逗号拼接
    ///
    /// 结果按 (作者, 日期, 内容, 标题, 摘要) 整体分组，而不是按文章 id。
    /// 这几项完全相同的两篇文章会被合并为一行。
    fn published_posts(&self) -> impl Future<Output = Result<Vec<WordPressPost>, sqlx::Error>> {
        async move {
            let sql = published_posts_sql(self.table_prefix());
            let posts = sqlx::query_as::<_, WordPressPost>(&sql)
                .fetch_all(self.db())
                .await?;
            Ok(posts)
        }
    }
}

fn published_posts_sql(prefix: &str) -> String {
    format!(
        r#"
        SELECT
            u.display_name AS author,
            p.post_date AS posted,
            p.post_content AS content,
            p.post_title AS title,
            p.post_excerpt AS excerpt,
            GROUP_CONCAT(ttc.name) AS categories,
            GROUP_CONCAT(ttt.name) AS tags
        FROM {prefix}posts p
        INNER JOIN {prefix}users u ON (u.ID = p.post_author)
        LEFT JOIN {prefix}term_relationships tr ON (tr.object_id = p.post_parent)
        LEFT JOIN {prefix}term_taxonomy tt ON (tt.term_taxonomy_id = tr.term_taxonomy_id)
        LEFT JOIN {prefix}terms ttc ON (ttc.term_id = tt.term_id AND tt.taxonomy = 'category')
        LEFT JOIN {prefix}terms ttt ON (ttt.term_id = tt.term_id AND tt.taxonomy = 'post_tag')
        WHERE p.ID IN (
            SELECT MAX(ID) AS id
            FROM {prefix}posts
            WHERE post_parent IN (
                SELECT ID
                FROM {prefix}posts
                WHERE post_parent = 0
                  AND post_status = 'publish'
            )
            AND post_type IN ('post', 'revision')
            GROUP BY post_parent
        )
        AND p.post_type IN ('post', 'revision')
        GROUP BY
            u.display_name,
            p.post_date,
            p.post_content,
            p.post_title,
            p.post_excerpt
        ORDER BY p.post_date
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_uses_table_prefix() {
        let sql = published_posts_sql("blog_");

        for table in [
            "blog_posts",
            "blog_users",
            "blog_term_relationships",
            "blog_term_taxonomy",
            "blog_terms",
        ] {
            assert!(sql.contains(table), "missing {table}");
        }
        assert!(!sql.contains("wp_"));
    }

    #[test]
    fn test_sql_groups_by_content_tuple() {
        let sql = published_posts_sql("wp_");
        let group_by = sql.rsplit("GROUP BY").next().unwrap();

        for column in [
            "u.display_name",
            "p.post_date",
            "p.post_content",
            "p.post_title",
            "p.post_excerpt",
        ] {
            assert!(group_by.contains(column), "missing {column}");
        }
        assert!(!group_by.contains("p.ID"));
    }
}
