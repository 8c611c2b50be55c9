use super::{Context, Reply};
use crate::error::Result;
use crate::model::{PersonName, PhoneNumber};

pub fn add(ctx: &mut Context<'_>, args: &[String]) -> Result<Reply> {
    let name: PersonName = args[0].parse()?;
    let phone: PhoneNumber = args[1].parse()?;
    ctx.book.add_phone(name, phone)?;
    Ok(Reply::success("Contact added."))
}

pub fn change(ctx: &mut Context<'_>, args: &[String]) -> Result<Reply> {
    let name: PersonName = args[0].parse()?;
    let old: PhoneNumber = args[1].parse()?;
    let new: PhoneNumber = args[2].parse()?;
    ctx.book.edit_phone(&name, &old, new)?;
    Ok(Reply::success("Contact updated."))
}

pub fn phone(ctx: &mut Context<'_>, args: &[String]) -> Result<Reply> {
    let name: PersonName = args[0].parse()?;
    Ok(Reply::info(ctx.book.show_phones(&name)?))
}

pub fn all(ctx: &mut Context<'_>, _args: &[String]) -> Result<Reply> {
    Ok(Reply::info(ctx.book.show_all_phones()?))
}

#[cfg(test)]
mod tests {
    use crate::book::fixtures::BookFixture;
    use crate::book::AddressBook;
    use crate::commands::test_support::exec;
    use crate::commands::{MessageLevel, Reply};

    #[test]
    fn add_on_empty_book() {
        let mut book = AddressBook::new();
        assert_eq!(
            exec(&mut book, "add Mark 0971122333"),
            Reply::success("Contact added.")
        );
        assert!(book.is_dirty());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn add_validates_name_then_phone() {
        let mut book = AddressBook::new();

        let reply = exec(&mut book, "add M 12");
        assert_eq!(reply.text, "Name must consist of 2 to 20 letters A-Z, a-z.");

        let reply = exec(&mut book, "add Mark 12");
        assert_eq!(
            reply.text,
            "Phone number must consist of 10 digits, example: 0971122333"
        );
        assert!(book.is_empty());
    }

    #[test]
    fn add_duplicate_phone() {
        let mut book = BookFixture::new().with_phone("Mark", "0971122333").build();
        let reply = exec(&mut book, "add Mark 0971122333");
        assert_eq!(reply.level, MessageLevel::Error);
        assert_eq!(
            reply.text,
            "Phone 0971122333 is already present in contact Mark and can not be added twice."
        );
        assert!(!book.is_dirty());
    }

    #[test]
    fn change_updates_phone() {
        let mut book = BookFixture::new().with_phone("Mark", "0971122333").build();
        assert_eq!(
            exec(&mut book, "change Mark 0971122333 0501234567"),
            Reply::success("Contact updated.")
        );
        assert!(book.is_dirty());
        assert_eq!(
            exec(&mut book, "phone Mark").text,
            "Contact: Mark\n\nPhone: 0501234567\n\n"
        );
    }

    #[test]
    fn change_unknown_contact_and_phone() {
        let mut book = BookFixture::new().with_phone("Mark", "0971122333").build();

        let reply = exec(&mut book, "change Bob 0971122333 0501234567");
        assert_eq!(reply.text, "Contact Bob is absent in address book.");

        let reply = exec(&mut book, "change Mark 0000000000 0501234567");
        assert_eq!(reply.text, "Phone 0000000000 is absent in contact Mark.");
        assert!(!book.is_dirty());
    }

    #[test]
    fn change_argument_count() {
        let mut book = AddressBook::new();
        assert_eq!(
            exec(&mut book, "change Mark 0971122333").text,
            "change: accepts 3 input arguments, but 2 were provided."
        );
    }

    #[test]
    fn phone_unknown_contact_is_a_reply() {
        let mut book = AddressBook::new();
        let reply = exec(&mut book, "phone Unknown");
        assert_eq!(reply.level, MessageLevel::Error);
        assert_eq!(reply.text, "Contact Unknown is absent in address book.");
        assert!(book.is_empty());
    }

    #[test]
    fn all_on_empty_book_warns() {
        let mut book = AddressBook::new();
        let reply = exec(&mut book, "all");
        assert_eq!(reply.level, MessageLevel::Warning);
        assert_eq!(reply.text, "There are no contacts in address book yet.");
    }

    #[test]
    fn all_lists_every_contact() {
        let mut book = BookFixture::new()
            .with_phone("Mark", "0971122333")
            .with_phone("Bob", "0000000001")
            .build();
        assert_eq!(
            exec(&mut book, "all").text,
            "All phones in address book:\n\n\
             Contact: Mark\n\nPhone: 0971122333\n\n\
             Contact: Bob\n\nPhone: 0000000001\n\n"
        );
        assert!(exec(&mut book, "all extra").text.starts_with("all: accepts 0"));
    }
}
