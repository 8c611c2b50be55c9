use super::{Context, Reply};
use crate::error::Result;
use crate::model::{Birthday, PersonName};

pub fn add_birthday(ctx: &mut Context<'_>, args: &[String]) -> Result<Reply> {
    let name: PersonName = args[0].parse()?;
    let birthday: Birthday = args[1].parse()?;
    ctx.book.add_birthday(name, birthday);
    Ok(Reply::success("Birthday added."))
}

pub fn show_birthday(ctx: &mut Context<'_>, args: &[String]) -> Result<Reply> {
    let name: PersonName = args[0].parse()?;
    Ok(Reply::info(ctx.book.show_birthday(&name)?))
}

pub fn birthdays(ctx: &mut Context<'_>, _args: &[String]) -> Result<Reply> {
    let report = ctx
        .book
        .show_birthdays(ctx.today, ctx.birthday_window_days)?;
    Ok(Reply::info(report))
}
